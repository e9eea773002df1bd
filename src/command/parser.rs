//! Command Parser
//!
//! Parses organizer shell lines into a [`Command`].
//!
//! # Supported Syntax
//!
//! ```text
//! ADD name ON date [FROM time] [TO time] [AT location] [DEPT department] CAPACITY n
//! FIND name
//! DEPT substring
//! REGISTER participant [course] FOR event
//! LIST [BY NAME|DATE]
//! ON date
//! COUNT FROM date TO date
//! STATS | HELP | EXIT | QUIT
//! ```
//!
//! Text is either a single bare word or `'quoted text'`. Dates must be
//! real calendar dates written `YYYY-MM-DD`.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while1, take_while_m_n},
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{map, map_res, not, opt, recognize, value, verify},
    sequence::{pair, preceded, tuple},
    IResult,
};

use crate::command::ast::{Command, ListOrder};
use crate::command::error::{CommandError, CommandResult};
use crate::store::NewEvent;
use chrono::NaiveDate;

/// Parse a command line into a Command
pub fn parse_command(input: &str) -> CommandResult<Command> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CommandError::Parse("Empty command".to_string()));
    }

    match parse_full_command(input) {
        Ok((remaining, command)) => {
            if remaining.trim().is_empty() {
                Ok(command)
            } else {
                Err(CommandError::Parse(format!(
                    "Unexpected input after command: '{}'",
                    remaining.trim()
                )))
            }
        }
        Err(e) => Err(CommandError::Parse(format!("Parse error: {:?}", e))),
    }
}

/// Parse any command
fn parse_full_command(input: &str) -> IResult<&str, Command> {
    let (input, _) = multispace0(input)?;
    let (input, command) = alt((
        parse_add,
        parse_find,
        parse_department,
        parse_register,
        parse_list,
        parse_on_date,
        parse_count,
        value(Command::Stats, tag_no_case("STATS")),
        value(Command::Help, tag_no_case("HELP")),
        value(Command::Exit, alt((tag_no_case("EXIT"), tag_no_case("QUIT")))),
    ))(input)?;
    let (input, _) = multispace0(input)?;

    Ok((input, command))
}

/// Parse ADD
fn parse_add(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("ADD")(input)?;
    let (input, name) = preceded(
        multispace1,
        verify(parse_text, |s: &str| !s.trim().is_empty()),
    )(input)?;
    let (input, date) = clause("ON", parse_date)(input)?;
    let (input, start_time) = opt(clause("FROM", parse_text))(input)?;
    let (input, end_time) = opt(clause("TO", parse_text))(input)?;
    let (input, location) = opt(clause("AT", parse_text))(input)?;
    let (input, department) = opt(clause("DEPT", parse_text))(input)?;
    let (input, capacity) = clause("CAPACITY", parse_integer)(input)?;

    let event = NewEvent::new(name, date, capacity)
        .times(start_time.unwrap_or_default(), end_time.unwrap_or_default())
        .location(location.unwrap_or_default())
        .department(department.unwrap_or_default());

    Ok((input, Command::Add(event)))
}

/// Parse FIND
fn parse_find(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("FIND")(input)?;
    let (input, name) = preceded(multispace1, parse_text)(input)?;
    Ok((input, Command::Find { name }))
}

/// Parse DEPT
fn parse_department(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("DEPT")(input)?;
    let (input, query) = preceded(multispace1, parse_text)(input)?;
    Ok((input, Command::Department { query }))
}

/// Parse REGISTER
fn parse_register(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("REGISTER")(input)?;
    let (input, participant) = preceded(multispace1, parse_text)(input)?;
    // Optional course, unless the next word is the FOR keyword
    let (input, course) = opt(preceded(
        pair(multispace1, not(pair(tag_no_case("FOR"), multispace1))),
        parse_text,
    ))(input)?;
    let (input, event) = clause("FOR", parse_text)(input)?;

    Ok((
        input,
        Command::Register {
            event,
            participant,
            course: course.unwrap_or_default(),
        },
    ))
}

/// Parse LIST
fn parse_list(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("LIST")(input)?;
    let (input, order) = opt(clause(
        "BY",
        alt((
            value(ListOrder::Date, tag_no_case("DATE")),
            value(ListOrder::Name, tag_no_case("NAME")),
        )),
    ))(input)?;

    Ok((
        input,
        Command::List {
            order: order.unwrap_or_default(),
        },
    ))
}

/// Parse ON
fn parse_on_date(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("ON")(input)?;
    let (input, date) = preceded(multispace1, parse_date)(input)?;
    Ok((input, Command::OnDate { date }))
}

/// Parse COUNT
fn parse_count(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("COUNT")(input)?;
    let (input, start) = clause("FROM", parse_date)(input)?;
    let (input, end) = clause("TO", parse_date)(input)?;
    Ok((input, Command::Count { start, end }))
}

/// Whitespace-delimited keyword followed by its argument
fn clause<'a, O, F>(
    keyword: &'static str,
    inner: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    preceded(tuple((multispace1, tag_no_case(keyword), multispace1)), inner)
}

/// Parse a calendar date in `YYYY-MM-DD` form
fn parse_date(input: &str) -> IResult<&str, String> {
    map_res(
        recognize(tuple((
            take_while_m_n(4, 4, |c: char| c.is_ascii_digit()),
            char('-'),
            take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
            char('-'),
            take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        ))),
        |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|_| s.to_string()),
    )(input)
}

/// Parse quoted text or a single bare word
fn parse_text(input: &str) -> IResult<&str, String> {
    alt((
        parse_quoted_string,
        map(take_while1(|c: char| !c.is_whitespace()), |s: &str| {
            s.to_string()
        }),
    ))(input)
}

/// Parse quoted string
fn parse_quoted_string(input: &str) -> IResult<&str, String> {
    let (input, _) = char('\'')(input)?;
    let (input, content) = take_while(|c| c != '\'')(input)?;
    let (input, _) = char('\'')(input)?;
    Ok((input, content.to_string()))
}

/// Parse signed integer
fn parse_integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}
