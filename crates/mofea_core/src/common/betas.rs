use ndarray as nd;

/// Smpl Betas or Shape Parameters
#[derive(Clone, Debug)]
pub struct Betas {
    pub betas: nd::Array1<f32>,
}
impl Default for Betas {
    fn default() -> Self {
        let num_betas = 10;
        Self::new_empty(num_betas)
    }
}
impl Betas {
    pub fn new(betas: nd::Array1<f32>) -> Self {
        Self { betas }
    }
    pub fn new_empty(num_betas: usize) -> Self {
        let betas = nd::Array1::<f32>::zeros(num_betas);
        Self { betas }
    }
}
