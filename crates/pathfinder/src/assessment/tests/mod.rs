mod common;

mod assembly;
mod classification;
mod stage2;
