/// Butler-Volmer electrode kinetics model.
///
/// Relates current density to overpotential through the anodic and
/// cathodic exponential branches, with an optional mass-transport
/// limiting current on the cathodic side.
pub mod constants;
pub mod outputs;
pub mod params;
pub mod processes;
pub mod run;
