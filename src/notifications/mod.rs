// SPDX-License-Identifier: MPL-2.0
//! Toast notification scheduler.
//!
//! Requests to show a toast are decoupled from the toasts on screen: new
//! requests pass an admission check, wait in a FIFO queue, and are promoted
//! into a bounded active set as capacity frees up.
//!
//! # Components
//!
//! - [`notification`] - `Toast`, `ToastId` and per-request `ToastOptions`
//! - [`store`] - Pending queue and active set
//! - [`admission`] - Admit-or-reject policy
//! - [`manager`] - `Manager`: admission, drain loop, removal, snapshots
//! - [`service`] - `ToastService`: shared manager with tokio auto-dismiss timers
//!
//! # Usage
//!
//! ```
//! use toastkit::config::ToastConfig;
//! use toastkit::notifications::{Manager, ToastOptions, Variant};
//!
//! let mut manager = Manager::new(ToastConfig {
//!     allow_multiple: true,
//!     max_concurrent: 2,
//!     ..ToastConfig::default()
//! });
//!
//! let saved = manager.submit("Saved", ToastOptions::new().variant(Variant::Success));
//! assert!(saved.is_some());
//! assert_eq!(manager.active_count(), 1);
//! ```

pub mod admission;
pub mod manager;
pub mod notification;
pub mod service;
pub mod store;
mod timer;

pub use admission::{Admission, RejectReason};
pub use manager::{Manager, Message, Removal, RemovalReason, Snapshot, Submission};
pub use notification::{Placement, Toast, ToastId, ToastOptions, Variant};
pub use service::ToastService;
pub use store::ActiveToast;
pub use timer::TimerHandle;
