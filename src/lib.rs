//! CareAuth - Client-Side Authentication Flow
//!
//! CareAuth is the authentication flow of the CareSupport patient app: the
//! sign-in and sign-up screen controllers, their validation and
//! error-classification logic, and the HTTP client for the authentication
//! backend. The crate is presentation-free: a UI shell drives a screen
//! through its field setters, triggers `submit`, and renders from the
//! `errors()` and `status()` accessors.
//!
//! # Overview
//!
//! Each screen composes four parts:
//!
//! - **Form state** (`form`) - the editable field values, the field-keyed
//!   error map, and the idle/in-flight submission status, owned exclusively
//!   by the screen controller.
//! - **Validation** (`validate`) - pure per-screen rules run on every
//!   submit attempt; a failing form never reaches the network.
//! - **Submission** (`screen`) - the async orchestration: guard against
//!   re-entry, validate, await the auth service, then classify the failure
//!   or hand off to the navigator, always returning to idle last.
//! - **Classification** (`classify`) - maps the backend's error descriptor
//!   to exactly one display message, by stable code where available and by
//!   message wording otherwise.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs        - Module exports and documentation
//! ├── config.rs     - Server URL and sign-up profile defaults
//! ├── types.rs      - Wire types for the auth backend
//! ├── error.rs      - Service-seam error types
//! ├── form.rs       - Form state, error map, submission status
//! ├── validate.rs   - Pre-submission validation rules
//! ├── classify.rs   - Service error classification
//! ├── service.rs    - AuthService trait and HTTP implementation
//! ├── navigation.rs - Route and Navigator boundary
//! ├── screen/       - Sign-in and sign-up controllers
//! └── startup.rs    - Splash/asset readiness gate
//! ```
//!
//! # Example
//!
//! ```no_run
//! use careauth::{Config, HttpAuthService, Navigator, Route, SignInScreen};
//!
//! struct Router;
//!
//! impl Navigator for Router {
//!     fn replace(&mut self, route: Route) {
//!         println!("navigating to {:?}", route);
//!     }
//! }
//!
//! # async fn run() {
//! let service = HttpAuthService::new(Config::new());
//! let mut router = Router;
//!
//! let mut screen = SignInScreen::new();
//! screen.set_email("user@example.com");
//! screen.set_password("hunter2!");
//! screen.submit(&service, &mut router).await;
//!
//! for (field, message) in screen.errors().iter() {
//!     eprintln!("{:?}: {}", field, message);
//! }
//! # }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod form;
pub mod navigation;
pub mod screen;
pub mod service;
pub mod startup;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder, ConfigError, ProfileDefaults};
pub use error::AuthCallError;
pub use form::{ErrorMap, Field, SignInForm, SignUpForm, SubmissionStatus};
pub use navigation::{Navigator, Route};
pub use screen::{SignInScreen, SignUpScreen};
pub use service::{AuthService, HttpAuthService};
pub use startup::ReadinessGate;
pub use types::{AuthOutcome, ServiceError, SignInRequest, SignUpProfile, SignUpRequest};
