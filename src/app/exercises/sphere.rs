use crate::domain::model::{SphereInput, SphereVolume};
use crate::domain::ports::{Exercise, InputSource};
use crate::utils::error::Result;
use std::f64::consts::PI;

pub const RADIUS_PROMPT: &str = "Enter radius (m): ";

pub fn sphere_volume(radius: i64) -> f64 {
    let r = radius as f64;
    (4.0 / 3.0) * PI * r * r * r
}

/// 球體體積；若已給定半徑就不再詢問
pub struct SphereExercise {
    radius: Option<i64>,
}

impl SphereExercise {
    pub fn new(radius: Option<i64>) -> Self {
        Self { radius }
    }
}

impl Exercise for SphereExercise {
    type Input = SphereInput;
    type Output = SphereVolume;

    fn name(&self) -> &'static str {
        "sphere"
    }

    fn read(&self, source: &mut dyn InputSource) -> Result<SphereInput> {
        let radius = match self.radius {
            Some(radius) => radius,
            None => source.read_i64(RADIUS_PROMPT)?,
        };
        Ok(SphereInput { radius })
    }

    fn evaluate(&self, input: SphereInput) -> SphereVolume {
        SphereVolume {
            radius: input.radius,
            volume: sphere_volume(input.radius),
        }
    }

    fn render(&self, output: &SphereVolume) -> String {
        format!("Volume of {}m sphere: {:.6}\n", output.radius, output.volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_volume() {
        assert_eq!(sphere_volume(0), 0.0);
        assert!((sphere_volume(1) - 4.18879).abs() < 1e-5);
        assert!((sphere_volume(4) - 268.082573).abs() < 1e-6);
    }

    #[test]
    fn test_render() {
        let exercise = SphereExercise::new(Some(4));
        let output = exercise.evaluate(SphereInput { radius: 4 });
        assert_eq!(exercise.render(&output), "Volume of 4m sphere: 268.082573\n");
    }
}
