// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`toast`]: Toast scheduling types ([`MaxConcurrent`](toast::MaxConcurrent),
//!   [`ToastDuration`](toast::ToastDuration))

pub mod diagnostics;
pub mod toast;
