use std::error::Error;
use crate::core::data::plane_coordinate::PlaneCoordinate;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, c: PlaneCoordinate) -> Result<Self::Success, Self::Failure>;
}
