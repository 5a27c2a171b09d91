mod make_path;

pub use make_path::MakePath;
