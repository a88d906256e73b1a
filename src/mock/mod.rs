// Mock backends for demo flows: inventory, order tracking, support tickets
// and invoicing. All output is randomized through a single seedable source
// (`rng`) and nothing is persisted.

pub mod cfdi;
pub mod inventory;
pub mod invoicing;
pub mod orders;
pub mod rng;
pub mod support;
