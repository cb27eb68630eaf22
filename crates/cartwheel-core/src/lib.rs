//! # cartwheel-core: Pure Business Logic for Cartwheel
//!
//! This crate is the **heart** of Cartwheel. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cartwheel Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Embedding Application (not this crate)             │   │
//! │  │     web handler ── desktop shell ── CLI ── test harness         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ cartwheel-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ registry  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  factory  │  │   │
//! │  │   │           │  │  rounding │  │ LineItem  │  │ avg ticket│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and LineItem with merge-on-add semantics
//! - [`registry`] - Cart factory keyed by customer, average-ticket metric
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Atomic Mutations**: A failed cart operation leaves the cart untouched
//!
//! ## Example Usage
//!
//! ```rust
//! use cartwheel_core::{CartRegistry, Money, Product};
//!
//! let mut registry = CartRegistry::new();
//!
//! // First access creates the cart; later accesses return the same one
//! let cart = registry.create("customer-1001").unwrap();
//! cart.add_item(&Product::new(1, "Espresso Beans 250g"), Money::from_cents(1099), 2)
//!     .unwrap();
//!
//! assert_eq!(cart.total_value(), Money::from_cents(2198));
//!
//! // One cart registered, so the average ticket equals its total
//! assert_eq!(registry.average_ticket(), Money::from_cents(2198));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod registry;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cartwheel_core::Money` instead of
// `use cartwheel_core::money::Money`

pub use cart::{Cart, LineItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use registry::CartRegistry;
pub use types::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in a cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum length of a customer identifier
///
/// Long enough for UUIDs, emails, and session tokens; short enough to catch
/// a payload pasted into the wrong field.
pub const MAX_CUSTOMER_ID_LEN: usize = 64;
