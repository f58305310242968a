use credtable::dispatch::{Command, ParseCommandError, Reply};
use credtable::hash::md5_hex;
use credtable::session::{EditField, Session};

fn run(session: &mut Session, line: &str) -> String {
    let command: Command = line.parse().unwrap();
    session.execute(command).unwrap().to_string()
}

// -------------------------------------------------------
// 1. PARSING
// -------------------------------------------------------

#[test]
fn parses_every_command() {
    assert_eq!(
        "REGISTER alice secret".parse(),
        Ok(Command::Register {
            username: "alice".into(),
            password: "secret".into()
        })
    );
    assert_eq!(
        "LOGIN alice secret".parse(),
        Ok(Command::Login {
            username: "alice".into(),
            password: "secret".into()
        })
    );
    assert_eq!(
        "EDIT_CURRENT USERNAME alicia".parse(),
        Ok(Command::EditCurrent {
            field: EditField::Username,
            value: "alicia".into()
        })
    );
    assert_eq!(
        "EDIT_CURRENT PASSWORD pw".parse(),
        Ok(Command::EditCurrent {
            field: EditField::Password,
            value: "pw".into()
        })
    );
    assert_eq!("IS_AUTHENTICATED".parse(), Ok(Command::IsAuthenticated));
    assert_eq!(
        "UNREGISTER bob pw".parse(),
        Ok(Command::Unregister {
            username: "bob".into(),
            password: "pw".into()
        })
    );
    assert_eq!("LOGOUT".parse(), Ok(Command::Logout));
    assert_eq!("INSPECT 3".parse(), Ok(Command::Inspect { row: 3 }));
    assert_eq!(
        "CHECK_USERNAME bob".parse(),
        Ok(Command::CheckUsername {
            username: "bob".into()
        })
    );
    assert_eq!("COUNT_USERNAME".parse(), Ok(Command::CountUsername));
    assert_eq!("CAPACITY".parse(), Ok(Command::Capacity));
    assert_eq!("EXIT".parse(), Ok(Command::Exit));
}

#[test]
fn tolerates_extra_whitespace() {
    assert_eq!(
        "  LOGIN   alice\tsecret  ".parse(),
        Ok(Command::Login {
            username: "alice".into(),
            password: "secret".into()
        })
    );
}

#[test]
fn rejects_malformed_lines() {
    assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
    assert_eq!(
        "FLY away".parse::<Command>(),
        Err(ParseCommandError::Unknown("FLY".into()))
    );
    assert_eq!(
        "REGISTER alice".parse::<Command>(),
        Err(ParseCommandError::WrongArity {
            command: "REGISTER",
            expected: 2,
            got: 1
        })
    );
    assert_eq!(
        "LOGOUT now".parse::<Command>(),
        Err(ParseCommandError::WrongArity {
            command: "LOGOUT",
            expected: 0,
            got: 1
        })
    );
    assert_eq!(
        "EDIT_CURRENT EMAIL a@b".parse::<Command>(),
        Err(ParseCommandError::InvalidEditField("EMAIL".into()))
    );
    assert_eq!(
        "INSPECT -1".parse::<Command>(),
        Err(ParseCommandError::InvalidRow("-1".into()))
    );
}

// -------------------------------------------------------
// 2. REPLIES
// -------------------------------------------------------

#[test]
fn scripted_session_transcript() {
    let mut session = Session::new();
    let secret = md5_hex(b"secret");
    let newpw = md5_hex(b"newpw");

    let script = [
        ("IS_AUTHENTICATED", "Please Login".to_string()),
        ("LOGOUT", "You Have Not Been Logged In".to_string()),
        ("REGISTER alice secret", "Register Successful".to_string()),
        ("REGISTER alice other", "Username Already Exist".to_string()),
        ("LOGIN bob secret", "Username Not Found".to_string()),
        ("LOGIN alice wrong", "Incorrect Password".to_string()),
        ("LOGIN alice secret", "Login Successful".to_string()),
        ("IS_AUTHENTICATED", format!("alice {secret}")),
        ("EDIT_CURRENT PASSWORD newpw", "Your Account Has Been Updated".to_string()),
        ("IS_AUTHENTICATED", format!("alice {newpw}")),
        ("REGISTER bob pw", "Register Successful".to_string()),
        ("EDIT_CURRENT USERNAME bob", "Username Already Exist".to_string()),
        ("EDIT_CURRENT USERNAME alicia", "Your Account Has Been Updated".to_string()),
        ("IS_AUTHENTICATED", format!("alicia {newpw}")),
        ("CHECK_USERNAME alice", "Username Not Found".to_string()),
        ("CHECK_USERNAME alicia", "Username Is Registered".to_string()),
        ("COUNT_USERNAME", "2".to_string()),
        ("CAPACITY", "11".to_string()),
        ("UNREGISTER bob wrong", "Incorrect Password".to_string()),
        ("UNREGISTER bob pw", "Your Account Has Been Deleted".to_string()),
        ("COUNT_USERNAME", "1".to_string()),
        ("LOGOUT", "You Have Been Logged Out".to_string()),
        ("EDIT_CURRENT PASSWORD x", "Please Login".to_string()),
        ("INSPECT 11", "Row Out Of Bounds".to_string()),
    ];

    for (line, expected) in script {
        assert_eq!(run(&mut session, line), expected, "after `{line}`");
    }
}

#[test]
fn inspect_reports_rows() {
    let mut session = Session::new();
    run(&mut session, "REGISTER alice secret");

    let replies: Vec<String> = (0..11)
        .map(|row| run(&mut session, &format!("INSPECT {row}")))
        .collect();

    let filled: Vec<&String> = replies.iter().filter(|r| *r != "Row Is Empty").collect();
    assert_eq!(filled, [&format!("alice {}", md5_hex(b"secret"))]);
}

#[test]
fn capacity_grows_through_commands() {
    let mut session = Session::new();
    for i in 0..8 {
        run(&mut session, &format!("REGISTER user{i} pw"));
    }

    assert_eq!(run(&mut session, "COUNT_USERNAME"), "8");
    assert_eq!(run(&mut session, "CAPACITY"), "23");
}

#[test]
fn malformed_lines_get_a_reply() {
    for line in ["FLY away", "REGISTER alice", "EDIT_CURRENT EMAIL a@b", "INSPECT -1"] {
        let err = line.parse::<Command>().unwrap_err();
        let reply = Reply::from(err);
        assert_eq!(reply, Reply::InvalidCommand, "for `{line}`");
        assert_eq!(reply.to_string(), "Invalid Command");
    }
}

#[test]
fn exit_ends_dispatch() {
    let mut session = Session::new();
    assert_eq!(session.execute(Command::Exit), None);
    assert_eq!(
        session.execute(Command::CountUsername),
        Some(Reply::Count(0))
    );
}
