//! Orbit camera and screen transform
//!
//! The camera is a plain world-to-camera matrix that is advanced by a fixed
//! rotation about a centre point each tick. The screen transform maps camera
//! space to pixels: it scales x and y, moves the last coordinate into w for
//! the perspective divide, and offsets the result to the window centre.

use polyview_math::{GeometryError, HomogeneousMatrix};

/// Camera-to-screen mapping
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTransform {
    /// Pixels per unit at depth 1, for x and y
    pub scale: [f64; 2],
    /// Screen position of the optical axis
    pub offset: [f64; 2],
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self {
            scale: [100.0, 100.0],
            offset: [300.0, 300.0],
        }
    }
}

impl ScreenTransform {
    pub fn new(scale: [f64; 2], offset: [f64; 2]) -> Self {
        Self { scale, offset }
    }

    /// Screen transform with the optical axis at the centre of a
    /// `width` x `height` viewport
    pub fn centered(width: u32, height: u32, scale: f64) -> Self {
        Self {
            scale: [scale, scale],
            offset: [f64::from(width) / 2.0, f64::from(height) / 2.0],
        }
    }

    /// The camera-to-screen matrix for `dimension`-dimensional space
    ///
    /// `translation(offset) * projection(d) * scaling(scale_x, scale_y, 1, ...)`.
    /// A camera-space point (x, y, z) lands at
    /// `(scale_x * x / z + offset_x, scale_y * y / z + offset_y)` with shade z.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DimensionMismatch`] with `expected: 3` for dimensions
    /// below 3.
    pub fn matrix(&self, dimension: usize) -> Result<HomogeneousMatrix, GeometryError> {
        if dimension < 3 {
            return Err(GeometryError::DimensionMismatch {
                expected: 3,
                found: dimension,
            });
        }

        let mut factors = vec![1.0; dimension];
        factors[..2].copy_from_slice(&self.scale);
        let mut offset = vec![0.0; dimension];
        offset[..2].copy_from_slice(&self.offset);

        HomogeneousMatrix::translation(&offset)?
            .compose(&HomogeneousMatrix::projection(dimension)?)?
            .compose(&HomogeneousMatrix::scaling(&factors)?)
    }
}

/// Camera that orbits a centre point at a constant rate
///
/// Each [`tick`](Self::tick) right-multiplies the world-to-camera matrix by
/// `translation(c) * rotation(rate, i, j) * translation(-c)`.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    world_to_camera: HomogeneousMatrix,
    step: HomogeneousMatrix,
    ticks: u64,
}

impl OrbitCamera {
    /// Create a camera starting at the identity
    ///
    /// `rate` is in radians per tick.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidDimension`] if `center` is empty
    /// - [`GeometryError::InvalidAxis`] if the plane is not valid in
    ///   `center.len()` dimensions
    pub fn new(
        center: &[f64],
        rate: f64,
        axis_i: usize,
        axis_j: usize,
    ) -> Result<Self, GeometryError> {
        let dimension = center.len();
        let negated: Vec<f64> = center.iter().map(|c| -c).collect();

        let step = HomogeneousMatrix::translation(center)?
            .compose(&HomogeneousMatrix::rotation(dimension, rate, axis_i, axis_j)?)?
            .compose(&HomogeneousMatrix::translation(&negated)?)?;

        log::debug!(
            "Orbit camera: {}D, centre {:?}, {} rad/tick in plane ({}, {})",
            dimension,
            center,
            rate,
            axis_i,
            axis_j
        );

        Ok(Self {
            world_to_camera: HomogeneousMatrix::identity(dimension)?,
            step,
            ticks: 0,
        })
    }

    /// A camera that never moves
    pub fn fixed(dimension: usize) -> Result<Self, GeometryError> {
        let identity = HomogeneousMatrix::identity(dimension)?;
        Ok(Self {
            world_to_camera: identity.clone(),
            step: identity,
            ticks: 0,
        })
    }

    /// Advance the orbit by one step
    pub fn tick(&mut self) -> Result<(), GeometryError> {
        self.world_to_camera = self.world_to_camera.compose(&self.step)?;
        self.ticks += 1;
        Ok(())
    }

    /// Return to the starting orientation
    pub fn reset(&mut self) -> Result<(), GeometryError> {
        self.world_to_camera = HomogeneousMatrix::identity(self.dimension())?;
        self.ticks = 0;
        Ok(())
    }

    #[inline]
    pub fn world_to_camera(&self) -> &HomogeneousMatrix {
        &self.world_to_camera
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.world_to_camera.dimension()
    }

    /// Number of ticks since creation or the last reset
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
