use crate::action::View;

#[derive(Debug, PartialEq)]
pub enum Response {
    Reply(String),
    SendHelp,
    Show(View),
    Nothing,
}
