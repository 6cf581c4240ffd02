//! ROTTEN - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for Relevance Optimized Text Trimming: describe
//! what you are looking for, upload one `.zip` of text/JSON files, and
//! download the trimmed archive the backend sends back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (settings button)          SettingsPanel (overlay)   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── StatusBanner (transient notices)                        │
//! │  ├── Instructions (toggleable)                               │
//! │  ├── QueryForm                                               │
//! │  │   ├── FieldGroup × 5  or  FieldGroup (natural language)   │
//! │  │   └── FilePicker                                          │
//! │  └── ResultPanel (when an archive came back)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ProcessingOverlay (while in flight)                         │
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All components share one `RwSignal<FormState>`; state only changes
//! through `FormState` transition methods.
//!
//! # Modules
//!
//! - [`config`] - Endpoint, limits and timings
//! - [`types`] - Common types (FieldId, QuerySpec, ResultArchive, etc.)
//! - [`state`] - Form state holder and submission state machine
//! - [`validation`] - Submit-time validation
//! - [`archive`] - Base64 size math and download naming
//! - [`registry`] - Form-value registry keyed by field
//! - [`notice`] - Cancellable timers for transient notices
//! - [`components`] - UI components
//! - [`services`] - File reading and backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod archive;
pub mod validation;
pub mod state;
pub mod registry;
pub mod notice;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Fields
    FieldId,
    // Query
    QuerySpec, StructuredFields,
    // Archives
    SelectedArchive, ResultArchive,
    // Status
    SubmissionStatus,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{FormState, Phase, SubmitIntent, CLEARED_ON_SUCCESS};
pub use validation::{validate, FormValues, MissingInputs};
pub use registry::FieldRegistry;
pub use notice::TransientTimer;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Mount the application on `<body>`. Called from the trunk binary.
#[wasm_bindgen]
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 ROTTEN - Starting Leptos App");

    if let Some(warning) = FileLimits::DEFAULT.mismatch() {
        log::warn!("⚠️ {}", warning);
    }

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="ROTTEN"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Single owner of all mutable UI state
    let state = create_rw_signal(FormState::new(FileLimits::DEFAULT));

    view! {
        <Header state=state/>
        <SettingsPanel state=state/>

        <div class="container">
            <StatusBanner state=state/>
            <Instructions state=state/>
            <QueryForm state=state/>
            <ResultPanel state=state/>
        </div>

        <ProcessingOverlay state=state/>
        <Footer/>
    }
}
