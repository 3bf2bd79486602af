/// Butler-Volmer current outputs.
///
/// Two levels: `Currents` holds a single overpotential point,
/// `PolarizationCurve` holds the full sweep (Vec of each field),
/// co-indexed with the input sample.
///
/// Single-point currents, returned by `point()`.
#[derive(Debug, Clone, Copy)]
pub struct Currents {
    pub eta: f64,      // overpotential [V]
    pub net: f64,      // ia - ic [A/m^2]
    pub anodic: f64,   // ia, oxidation branch [A/m^2]
    pub cathodic: f64, // ic, reduction branch magnitude [A/m^2]
}

/// Full sweep of currents, returned by `run()`.
#[derive(Debug)]
pub struct PolarizationCurve {
    pub eta: Vec<f64>,
    pub net: Vec<f64>,
    pub anodic: Vec<f64>,
    pub cathodic: Vec<f64>,
}

impl PolarizationCurve {
    /// Pre-allocate all vectors for `n` sample points.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            eta: Vec::with_capacity(n),
            net: Vec::with_capacity(n),
            anodic: Vec::with_capacity(n),
            cathodic: Vec::with_capacity(n),
        }
    }

    /// Push a single point's currents onto the curve.
    pub fn push(&mut self, c: &Currents) {
        self.eta.push(c.eta);
        self.net.push(c.net);
        self.anodic.push(c.anodic);
        self.cathodic.push(c.cathodic);
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.net.len()
    }

    /// Returns `true` if there are no sample points.
    pub fn is_empty(&self) -> bool {
        self.net.is_empty()
    }
}
