use electrokinetics::butler_volmer::params::Parameters;
use electrokinetics::butler_volmer::run;
use electrokinetics::sweep::OverpotentialSweep;
use electrokinetics::tafel::tafel_slope;

fn main() {
    let p = Parameters::new(1.0, 0.5, 0.5, 1, 300.0, Some(1.0)).unwrap();

    // 11 points across the +/-0.25 V window
    let sweep = OverpotentialSweep::linspace(-0.25, 0.25, 11).unwrap();

    // Run the model
    let result = run::run(&p, sweep.values());

    // Print results
    println!(" eta [V] | ia [A/m^2] | ic [A/m^2] |  i [A/m^2]");
    println!("---------|------------|------------|-----------");
    for t in 0..result.len() {
        println!(
            " {:>+7.3} | {:>10.4} | {:>10.4} | {:>+10.4}",
            result.eta[t], result.anodic[t], result.cathodic[t], result.net[t],
        );
    }

    // Tafel diagnostics for both branches
    let ba = tafel_slope(p.alpha_a, p.n, p.temperature).unwrap();
    let bc = tafel_slope(p.alpha_c, p.n, p.temperature).unwrap();
    println!(
        "\nTafel slopes: anodic {:.4} V/dec, cathodic {:.4} V/dec",
        ba, bc
    );
}
