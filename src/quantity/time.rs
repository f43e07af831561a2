quantity!(Days, via: f64, suffix: "d", precision: 1);

impl Days {
    pub const ONE: Self = Self(1.0);
}
