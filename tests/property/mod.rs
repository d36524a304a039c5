mod token_proptest;
mod validation_proptest;
