/// Postal address of a facility following the Moroccan
/// administrative division (region > province > commune).
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street   : Option<String>,
    pub commune  : Option<String>,
    pub city     : Option<String>,
    pub province : Option<String>,
    pub region   : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.commune.is_none()
            && self.city.is_none()
            && self.province.is_none()
            && self.region.is_none()
    }
}
