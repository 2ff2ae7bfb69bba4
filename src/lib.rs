//! # Vitrine
//!
//! A product detail page renderer for static storefronts. A resolved
//! product-details payload (JSON from your data loader) goes in, a
//! self-contained product page (HTML with embedded CSS) comes out.
//!
//! # Architecture: Render Over Resolved Data
//!
//! Vitrine is the last stage of a storefront pipeline it does not own.
//! Product lookup, pricing, stock and shipping all happen upstream; by
//! the time this crate runs, every input is already resolved:
//!
//! ```text
//! loader  →  payload.json  →  vitrine render  →  product.html
//! ```
//!
//! Rendering is a synchronous pure pass over that payload. There is no
//! page state machine: the single branch is payload presence (a JSON
//! `null` is the loader's not-found signal and renders the not-found
//! view). Everything that mutates the outside world — cart, wishlist,
//! shipping estimates, analytics dispatch — is behind an injected
//! capability, so the data-shaping core tests in isolation.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Payload data model (schema.org commerce vocabulary) and loading |
//! | [`images`] | Stable image URL reconciliation across sibling SKUs |
//! | [`layout`] | Gallery layout selection (`front-back` vs `slider`) |
//! | [`offer`] | Collapses an aggregate offer into the one the page shows |
//! | [`format`] | Price display formatting |
//! | [`render`] | Page composition with Maud — the detail and not-found views |
//! | [`widgets`] | Collaborator capabilities (selector, cart, wishlist, shipping) |
//! | [`analytics`] | `view_item` event mapping and the sink capability |
//! | [`config`] | `config.toml` loading, validation, and color CSS generation |
//! | [`output`] | CLI output formatting — render summaries |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped, which matters
//!   when product names and descriptions come from a catalog you don't control.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Stable Images Across Sibling SKUs
//!
//! Catalogs that store one asset per SKU give the same photo a different
//! URL on every sibling, so switching the selected SKU re-downloads
//! images the browser already has and the gallery flashes. The
//! [`images::reconcile`] pass keys images by filename and maps
//! same-named files across the product group to one canonical URL. It
//! never invents a URL: no filename match means the original URL stays.
//!
//! ## Capability Injection for Widgets
//!
//! The cart button, wishlist toggle, variant selector and shipping
//! estimator are storefront-specific. The composer receives them as
//! trait objects ([`widgets::Collaborators`]) instead of importing
//! concrete implementations, and the analytics sink is a trait too. The
//! stock implementations render plain `data-*`-attributed markup;
//! swapping one out is a one-line change at the call site and tests use
//! recording fakes.
//!
//! ## Exactly One Analytics Event
//!
//! A successful detail render emits one `view_item` event with the
//! product, breadcrumb context and both prices. The not-found view emits
//! nothing. Emission happens in the composer, not the CLI, so every
//! embedding of the library gets the same guarantee.

pub mod analytics;
pub mod config;
pub mod format;
pub mod images;
pub mod layout;
pub mod offer;
pub mod output;
pub mod render;
pub mod types;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_helpers;
