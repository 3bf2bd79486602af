/// Butler-Volmer kinetic parameters.
///
/// Six values that define the electrode response. Construction goes
/// through `new`, which enforces the physical domain before any math
/// can run on the values.
///
/// - `i0`: Exchange current density [A/m^2]
/// - `alpha_a`: Anodic charge transfer coefficient [-]
/// - `alpha_c`: Cathodic charge transfer coefficient [-]
/// - `n`: Number of electrons transferred [-]
/// - `temperature`: Absolute temperature [K]
/// - `ilim`: Limiting current density [A/m^2]; `None` means no
///   mass-transport limit is applied

#[derive(Debug, Clone, Copy)]
pub struct Parameters {
    pub i0: f64,
    pub alpha_a: f64,
    pub alpha_c: f64,
    pub n: u32,
    pub temperature: f64,
    pub ilim: Option<f64>,
}

impl Parameters {
    /// Create new Parameters, returning an error naming the first
    /// parameter outside its physical domain.
    pub fn new(
        i0: f64,
        alpha_a: f64,
        alpha_c: f64,
        n: u32,
        temperature: f64,
        ilim: Option<f64>,
    ) -> Result<Self, String> {
        if i0.is_nan() || i0 < 0.0 {
            return Err(format!("i0 = {} must be non-negative", i0));
        }
        if !(alpha_a > 0.0 && alpha_a <= 1.0) {
            return Err(format!("alpha_a = {} is out of bounds (0, 1]", alpha_a));
        }
        if !(alpha_c > 0.0 && alpha_c <= 1.0) {
            return Err(format!("alpha_c = {} is out of bounds (0, 1]", alpha_c));
        }
        if n < 1 {
            return Err(format!("n = {} must be at least 1", n));
        }
        if temperature.is_nan() || temperature <= 0.0 {
            return Err(format!("temperature = {} K must be positive", temperature));
        }
        if let Some(limit) = ilim {
            if limit.is_nan() || limit <= 0.0 {
                return Err(format!("ilim = {} must be positive", limit));
            }
        }
        Ok(Self {
            i0,
            alpha_a,
            alpha_c,
            n,
            temperature,
            ilim,
        })
    }
}
