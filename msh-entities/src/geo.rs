/// A geographical position in decimal degrees (WGS 84).
///
/// A `MapPoint` is either complete or absent: there is no way to
/// construct a point that only carries one of both coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const LAT_DEG_MIN: f64 = -90.0;
    pub const LAT_DEG_MAX: f64 = 90.0;
    pub const LNG_DEG_MIN: f64 = -180.0;
    pub const LNG_DEG_MAX: f64 = 180.0;

    /// Creates a point without checking the ranges.
    ///
    /// Only use this for constants and values that have
    /// been validated before.
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self { lat, lng };
        pos.is_valid().then_some(pos)
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (Self::LAT_DEG_MIN..=Self::LAT_DEG_MAX).contains(&self.lat)
            && (Self::LNG_DEG_MIN..=Self::LNG_DEG_MAX).contains(&self.lng)
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_points() {
        assert!(MapPoint::try_from_lat_lng_deg(0.0, 0.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(90.0, 180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, -180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(33.5731, -7.5898).is_some());
    }

    #[test]
    fn invalid_points() {
        assert!(MapPoint::try_from_lat_lng_deg(90.1, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.1).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, f64::INFINITY).is_none());
    }
}
