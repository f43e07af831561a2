quantity!(Kilometers, via: f64, suffix: "km", precision: 1);

impl Kilometers {
    /// Both legs of a round trip.
    #[must_use]
    pub fn doubled(self) -> Self {
        self * 2.0
    }
}
