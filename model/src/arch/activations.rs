use crate::spec::ActFnSpec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActFn {
    Sigmoid { amp: f64 },
    Relu,
}
use ActFn::*;

impl ActFn {
    pub fn sigmoid(amp: f64) -> Self {
        Sigmoid { amp }
    }

    pub fn relu() -> Self {
        Relu
    }

    pub fn f(&self, z: f64) -> f64 {
        match self {
            Sigmoid { amp } => amp / (1. + (-z).exp()),
            Relu => z.max(0.),
        }
    }
}

impl From<ActFnSpec> for ActFn {
    fn from(spec: ActFnSpec) -> Self {
        match spec {
            ActFnSpec::Sigmoid { amp } => Self::sigmoid(amp),
            ActFnSpec::Relu => Self::relu(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_at_half_amplitude() {
        assert_eq!(ActFn::sigmoid(1.).f(0.), 0.5);
        assert_eq!(ActFn::sigmoid(4.).f(0.), 2.);
    }

    #[test]
    fn relu_clamps_negatives() {
        assert_eq!(ActFn::relu().f(-3.), 0.);
        assert_eq!(ActFn::relu().f(2.5), 2.5);
    }
}
