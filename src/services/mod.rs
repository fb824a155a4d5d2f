// Ripe Browser services
// Services provide stateless helpers: address-bar resolution and settings loading.

pub mod address_bar;
pub mod settings_engine;
