//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is the view one `AppRoute` mounts into the app outlet. Pages only
//! need to be mountable; the quiz flows behind them live elsewhere.

pub mod crear_pregunta;
pub mod historial;
pub mod home;
pub mod not_found;
pub mod quiz;
