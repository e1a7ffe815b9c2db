use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParserError{
    #[error("Invalid value '{0}' for --individual. Expected ID:SEX[:STATUS] (e.g. 'I1:M', 'proband:female:affected')")]
    ParseIndividual(String),

    #[error("Invalid affected status '{0}'. Expected one of 'affected', 'a', 'unaffected' or 'u'")]
    ParseStatus(String),

    #[error("Invalid value '{0}' for --link. Expected CHILD:PARENT (e.g. 'I3:I1')")]
    ParseLink(String),

    #[error("Failed to serialize command line arguments")]
    SerializeArgs,
}
