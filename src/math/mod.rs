//! Small fixed-size linear algebra for the render pipeline.
//!
//! Matrices are stored row-major and multiply column vectors (`M * v`).

/// Implements the component-wise arithmetic shared by the vector types:
/// vector `+`/`-`, scalar `*`/`/` and negation.
macro_rules! componentwise_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl std::ops::Add for $ty {
            type Output = $ty;

            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $ty {
            type Output = $ty;

            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::Mul<f32> for $ty {
            type Output = $ty;

            #[inline]
            fn mul(self, rhs: f32) -> $ty {
                $ty { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Div<f32> for $ty {
            type Output = $ty;

            #[inline]
            fn div(self, rhs: f32) -> $ty {
                $ty { $($field: self.$field / rhs),+ }
            }
        }

        impl std::ops::Neg for $ty {
            type Output = $ty;

            #[inline]
            fn neg(self) -> $ty {
                $ty { $($field: -self.$field),+ }
            }
        }
    };
}

pub mod mat4;
pub mod quat;
pub mod vec2;
pub mod vec3;
pub mod vec4;
