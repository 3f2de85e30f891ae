//! Per-frame systems, run in order by the engine:
//! view snapshot → instance update → surveillance publish.

pub mod instance;
pub mod surveillance;
pub mod view;
