use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /* expected validation errors, caught before anything leaves the client */

    #[error("{}", crate::consts::EMPTY_PASSWORD_PROMPT)]
    EmptyPassword,

    /* Anything that interrupted the round trip: connection, body, decoding.
       Intentionnaly not split into classes, the user only gets to read the message. */
    #[error("{0:#}")]
    ClientSideError(
        #[from]
        eyre::Report
    ),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_side_error_displays_whole_chain() {
        let e: Error = eyre::eyre!("connection refused")
            .wrap_err("Reqwest error")
            .into();

        assert_eq!(e.to_string(), "Reqwest error: connection refused");
    }

    #[test]
    fn empty_password_reads_as_prompt() {
        assert_eq!(Error::EmptyPassword.to_string(), "Please enter a password");
    }
}
