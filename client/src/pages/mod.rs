//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is mounted beneath `NavigationContainer` by the router. Guarded
//! pages receive the auth state as a prop and own their redirect effect.

pub mod home;
pub mod landing;
pub mod login;
pub mod profile;
pub mod registration;
