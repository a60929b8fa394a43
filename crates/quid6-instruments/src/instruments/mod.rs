pub mod quid6;
