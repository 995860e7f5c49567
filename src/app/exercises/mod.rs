pub mod ball_drop;
pub mod calculator;
pub mod sphere;
pub mod tax;

pub use ball_drop::BallDropExercise;
pub use calculator::CalculatorExercise;
pub use sphere::SphereExercise;
pub use tax::TaxExercise;
