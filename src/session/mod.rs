pub mod state;

pub use state::{ActiveEcosystem, ClassroomState, ExperimentRecord, USER_MODEL_NAME};
