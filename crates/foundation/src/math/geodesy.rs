use super::vec::{LonLat, Vec3};

/// WGS84 semi-major axis (meters).
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS84 semi-minor axis (meters).
pub const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);
/// WGS84 first eccentricity squared.
pub const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);

/// Geodetic position: geographic coordinates plus ellipsoidal height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geodetic {
    pub position: LonLat,
    pub alt_m: f64,
}

impl Geodetic {
    pub fn new(position: LonLat, alt_m: f64) -> Self {
        Self { position, alt_m }
    }

    pub fn on_surface(position: LonLat) -> Self {
        Self::new(position, 0.0)
    }

    /// Earth-centered, Earth-fixed Cartesian coordinates (meters).
    pub fn to_ecef(self) -> Vec3 {
        let lat = self.position.lat_deg.to_radians();
        let lon = self.position.lon_deg.to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
        Vec3::new(
            (n + self.alt_m) * cos_lat * cos_lon,
            (n + self.alt_m) * cos_lat * sin_lon,
            (n * (1.0 - WGS84_E2) + self.alt_m) * sin_lat,
        )
    }

    /// Local east/north/up unit vectors at this position, in ECEF axes.
    ///
    /// Right-handed: east x north = up.
    pub fn enu_basis(self) -> (Vec3, Vec3, Vec3) {
        let lat = self.position.lat_deg.to_radians();
        let lon = self.position.lon_deg.to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        let east = Vec3::new(-sin_lon, cos_lon, 0.0);
        let north = Vec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);
        let up = Vec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);
        (east, north, up)
    }
}
