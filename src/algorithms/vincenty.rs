//! Ellipsoid-exact distance using Vincenty's inverse formula.
//!
//! Accurate to well below a millimeter, at the cost of an iteration
//! that may fail to converge for nearly antipodal points.

use crate::error::VincentyError;
use crate::types::coordinate::Coordinate;
use crate::types::distance::DistanceStrategy;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

/// Change in longitude on the auxiliary sphere (radians) under which the
/// iteration is considered converged.
const CONVERGENCE_THRESHOLD: f64 = 1e-12;

/// Geodesic distance on the ellipsoid shared by both coordinates.
/// Distances are in meters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Vincenty {
    max_iterations: u32,
}

impl Vincenty {
    /// Caps the iteration at `max_iterations`. The first iteration always
    /// runs, so coincident points measure 0 even with a cap of 0.
    pub fn new(max_iterations: u32) -> Self {
        Vincenty { max_iterations }
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for Vincenty {
    fn default() -> Self {
        Vincenty::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl DistanceStrategy for Vincenty {
    type Error = VincentyError;

    /// # Returns
    /// * [`VincentyError::EllipsoidMismatch`] if `a` and `b` are on
    ///   different ellipsoids.
    /// * [`VincentyError::NoConvergence`] if the iteration cap is hit.
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> Result<f64, Self::Error> {
        if a.ellipsoid() != b.ellipsoid() {
            debug!(
                "Refusing to measure across ellipsoids {} and {}",
                a.ellipsoid().name(),
                b.ellipsoid().name()
            );
            return Err(VincentyError::EllipsoidMismatch(
                a.ellipsoid().name(),
                b.ellipsoid().name(),
            ));
        }

        let ellipsoid = a.ellipsoid();
        let semi_major = ellipsoid.semi_major_axis();
        let semi_minor = ellipsoid.semi_minor_axis();
        let f = ellipsoid.flattening();

        let l = (b.longitude() - a.longitude()).to_radians();
        let u1 = ((1.0 - f) * a.latitude().to_radians().tan()).atan();
        let u2 = ((1.0 - f) * b.latitude().to_radians().tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        let mut iterations = 0;
        let (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m) = loop {
            iterations += 1;

            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();
            if sin_sigma == 0.0 {
                // Coincident points.
                return Ok(0.0);
            }
            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            // Both points on the equator.
            let cos_2sigma_m = if cos_sq_alpha != 0.0 {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            } else {
                0.0
            };
            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));

            let previous = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

            if (lambda - previous).abs() <= CONVERGENCE_THRESHOLD {
                break (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m);
            }
            if iterations >= self.max_iterations {
                debug!("No convergence between {} and {}", a, b);
                return Err(VincentyError::NoConvergence(self.max_iterations));
            }
        };

        let u_sq = cos_sq_alpha * (semi_major.powi(2) - semi_minor.powi(2)) / semi_minor.powi(2);
        let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
        let delta_sigma = big_b
            * sin_sigma
            * (cos_2sigma_m
                + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                        - big_b / 6.0
                            * cos_2sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

        let distance = semi_minor * big_a * (sigma - delta_sigma);
        trace!("vincenty {} -> {}: {} m after {} iterations", a, b, distance, iterations);
        Ok(distance)
    }
}
