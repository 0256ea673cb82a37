//! Random coordinates for tests.

use rand::Rng;

use crate::types::coordinate::Coordinate;

/// Returns a random `(latitude, longitude)` pair inside the valid ranges,
/// bounds included.
pub fn random_valid<R: Rng>(rng: &mut R) -> (f64, f64) {
    (rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
}

/// Returns a latitude strictly outside `[-90, 90]`.
pub fn random_invalid_latitude<R: Rng>(rng: &mut R) -> f64 {
    outside(rng, 90.0)
}

/// Returns a longitude strictly outside `[-180, 180]`.
pub fn random_invalid_longitude<R: Rng>(rng: &mut R) -> f64 {
    outside(rng, 180.0)
}

fn outside<R: Rng>(rng: &mut R, limit: f64) -> f64 {
    let magnitude = limit + rng.gen_range(1e-6..1_000.0);
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Generate random coordinates near a center.
///
/// # Arguments
/// * `center` - The coordinate to scatter around.
/// * `radius` - Maximum distance from `center`, in meters.
/// * `capacity` - Number of coordinates to generate.
///
/// Offsets are drawn in a local flat approximation, so keep `radius`
/// small compared to the earth and `center` away from the poles.
pub fn generate_coordinates_near(center: &Coordinate, radius: f64, capacity: usize) -> Vec<Coordinate> {
    let mut rng = rand::thread_rng();
    let earth_radius = center.ellipsoid().mean_radius();
    let meters_per_degree = earth_radius.to_radians();
    (0..capacity)
        .filter_map(|_| {
            let distance = radius * rng.gen::<f64>().sqrt();
            let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
            let d_lat = distance * bearing.cos() / meters_per_degree;
            let d_lng = distance * bearing.sin()
                / (meters_per_degree * center.latitude().to_radians().cos());
            Coordinate::new(center.latitude() + d_lat, center.longitude() + d_lng).ok()
        })
        .collect()
}
