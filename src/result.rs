pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    SqlError(rusqlite::Error),
    JsonError(serde_json::Error),
    IOError(std::io::Error),
    WindowError(three_d::WindowError),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Error {
        Error::SqlError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IOError(err)
    }
}

impl From<three_d::WindowError> for Error {
    fn from(err: three_d::WindowError) -> Error {
        Error::WindowError(err)
    }
}
