//! Conversions between ``ndarray`` arrays and ``burn`` tensors
use burn::tensor::{backend::Backend, Float, Tensor, TensorData};
use ndarray as nd;

pub trait ToBurn<B: Backend, const D: usize> {
    fn to_burn(&self, device: &B::Device) -> Tensor<B, D, Float>;
}

impl<B: Backend, S, Dim, const D: usize> ToBurn<B, D> for nd::ArrayBase<S, Dim>
where
    S: nd::Data<Elem = f32>,
    Dim: nd::Dimension,
{
    /// # Panics
    /// Will panic if the number of dimensions of the array is not ``D``
    fn to_burn(&self, device: &B::Device) -> Tensor<B, D, Float> {
        assert_eq!(self.ndim(), D, "Array has {} dimensions but the tensor was requested with {D}", self.ndim());
        //iter() walks in logical order so this also works for non-contiguous views
        let values: Vec<f32> = self.iter().copied().collect();
        let data = TensorData::new(values, self.shape().to_vec());
        Tensor::<B, D, Float>::from_data(data, device)
    }
}

/// # Panics
/// Will panic if the tensor data cannot be read back as f32
pub fn tensor_to_data_float<B: Backend, const D: usize>(tensor: &Tensor<B, D, Float>) -> Vec<f32> {
    tensor
        .clone()
        .into_data()
        .convert::<f32>()
        .to_vec::<f32>()
        .unwrap_or_else(|e| panic!("Cannot read tensor data as f32: {e:?}"))
}

/// # Panics
/// Will panic if the tensor data cannot be read back as f32
pub fn tensor_to_array2<B: Backend>(tensor: &Tensor<B, 2, Float>) -> nd::Array2<f32> {
    let [rows, cols] = tensor.dims();
    nd::Array2::from_shape_vec((rows, cols), tensor_to_data_float(tensor)).expect("Shape mismatch during tensor to ndarray conversion")
}
