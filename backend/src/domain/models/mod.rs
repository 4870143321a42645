pub mod bird;
pub mod breeding_pair;
pub mod medical_record;
pub mod training_log;
