use burn::{
    prelude::Backend,
    tensor::{Float, Tensor},
};
/// Result of ``smpl_model.forward()``. Only joints are produced, there is no
/// skinned mesh. This component is a generic over burn backend
#[derive(Clone, Debug)]
pub struct SmplOutputDynamic<B: Backend> {
    /// posed joints ``[nr_joints, 3]`` including the global translation
    pub joints: Tensor<B, 2, Float>,
}
