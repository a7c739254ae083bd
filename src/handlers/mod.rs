//! Request handlers, one module per resource.

pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;
