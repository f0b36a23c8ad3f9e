pub mod responders;
