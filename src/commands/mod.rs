pub mod rephrase;
