/// Factor with which jump distances are normalized based on the circle size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct ScalingFactor {
    pub radius: f64,
    pub factor: f64,
}

impl ScalingFactor {
    const NORMALIZED_RADIUS: f64 = 50.0;

    pub fn new(cs: f64) -> Self {
        let radius = 32.0 * (1.0 - 0.7 * (cs - 5.0) / 5.0);
        let mut factor = Self::NORMALIZED_RADIUS / radius;

        // Small circles get a slight bonus on top of the normalization
        if radius < 30.0 {
            factor *= 1.0 + (30.0 - radius).min(5.0) / 50.0;
        }

        Self { radius, factor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smaller_circles_scale_up() {
        let cs4 = ScalingFactor::new(4.0);
        let cs7 = ScalingFactor::new(7.0);

        assert!(cs7.radius < cs4.radius);
        assert!(cs7.factor > cs4.factor);
    }
}
