use ndarray as nd;
/// Smpl Expressions or Expression Parameters
#[derive(Clone, Debug)]
pub struct Expression {
    pub expr_coeffs: nd::Array1<f32>,
}
impl Default for Expression {
    fn default() -> Self {
        let num_coeffs = 10;
        Self::new_empty(num_coeffs)
    }
}
impl Expression {
    pub fn new(expr_coeffs: nd::Array1<f32>) -> Self {
        Self { expr_coeffs }
    }
    pub fn new_empty(num_coeffs: usize) -> Self {
        let expr_coeffs = nd::Array1::<f32>::zeros(num_coeffs);
        Self { expr_coeffs }
    }
}
