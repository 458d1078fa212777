use error_stack::Report;
use kernel::KernelError;
use sqlx::error::ErrorKind;
use sqlx::migrate::MigrateError;

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, sqlx::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                sqlx::Error::PoolTimedOut => KernelError::Timeout,
                sqlx::Error::Database(database) => match database.kind() {
                    ErrorKind::UniqueViolation => KernelError::Conflict,
                    ErrorKind::ForeignKeyViolation => KernelError::UnknownReference,
                    ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                        KernelError::InvalidInput
                    }
                    _ => KernelError::Internal,
                },
                _ => KernelError::Internal,
            };
            Report::from(error).change_context(context)
        })
    }
}

impl<T> ConvertError for Result<T, MigrateError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            Report::from(error)
                .change_context(KernelError::Internal)
                .attach_printable("Failed to apply migrations")
        })
    }
}
