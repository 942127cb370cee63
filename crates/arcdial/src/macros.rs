#[macro_export]
macro_rules! impl_scalar_newtype {
    ($name:ty) => {
        impl $name {
            pub const fn new(v: f64) -> Self {
                Self(v)
            }

            pub const fn get(self) -> f64 {
                self.0
            }
        }
    };
}
