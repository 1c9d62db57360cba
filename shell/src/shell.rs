use std::{fmt, str::FromStr};

use roster::{Details, Error as RosterError, Roster, Student};
use tracing::{debug, info};

use crate::error::{Result, ShellError};
use crate::input::Input;
use crate::print::{print_details, print_list, print_message};

const CHOICE_PROMPT: &str = "Enter your choice: ";
const CONTINUE_PROMPT: &str = "Press Enter to continue...";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const INVALID_NUMBER: &str = "Invalid number. Please try again.";

#[derive(Default)]
pub(crate) struct Shell {
    roster: Roster,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Running,
    Exited,
}

enum MainCommand {
    StudentMenu,
    Exit,
}

impl FromStr for MainCommand {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s.parse::<u32>() {
            Ok(1) => Ok(Self::StudentMenu),
            Ok(2) => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

enum StudentCommand {
    Add,
    Update,
    Delete,
    View,
    ViewAll,
    Back,
}

impl FromStr for StudentCommand {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s.parse::<u32>() {
            Ok(1) => Ok(Self::Add),
            Ok(2) => Ok(Self::Update),
            Ok(3) => Ok(Self::Delete),
            Ok(4) => Ok(Self::View),
            Ok(5) => Ok(Self::ViewAll),
            Ok(6) => Ok(Self::Back),
            _ => Err(()),
        }
    }
}

impl Shell {
    /// Runs the menu until the user picks Exit.
    pub(crate) fn run(&mut self, input: &mut impl Input, output: &mut impl fmt::Write) -> Result<()> {
        info!("Session started");
        let mut state = State::Running;
        while state == State::Running {
            state = self.main_menu(input, output)?;
        }

        info!(students = self.roster.len(), "Session exited");
        Ok(())
    }

    fn main_menu(&mut self, input: &mut impl Input, output: &mut impl fmt::Write) -> Result<State> {
        writeln!(output, "===== Student Management System =====")?;
        writeln!(output, "1. Student Menu")?;
        writeln!(output, "2. Exit")?;

        match read_choice::<MainCommand>(input)? {
            Some(MainCommand::StudentMenu) => self.student_menu(input, output)?,
            Some(MainCommand::Exit) => {
                writeln!(output, "Goodbye! Have a nice day.")?;
                writeln!(output, "Exiting...")?;
                return Ok(State::Exited);
            },
            None => print_message(INVALID_CHOICE, output)?,
        }

        Ok(State::Running)
    }

    fn student_menu(&mut self, input: &mut impl Input, output: &mut impl fmt::Write) -> Result<()> {
        loop {
            writeln!(output, "===== Student Menu =====")?;
            writeln!(output, "1. Add Student")?;
            writeln!(output, "2. Update Student")?;
            writeln!(output, "3. Delete Student")?;
            writeln!(output, "4. View Student Details")?;
            writeln!(output, "5. View All Students")?;
            writeln!(output, "6. Back")?;

            match read_choice::<StudentCommand>(input)? {
                Some(StudentCommand::Add) => self.add_student(input, output)?,
                Some(StudentCommand::Update) => self.update_student(input, output)?,
                Some(StudentCommand::Delete) => self.delete_student(input, output)?,
                Some(StudentCommand::View) => self.view_student(input, output)?,
                Some(StudentCommand::ViewAll) => self.view_all_students(input, output)?,
                Some(StudentCommand::Back) => return Ok(()),
                None => print_message(INVALID_CHOICE, output)?,
            }
        }
    }

    fn add_student(&mut self, input: &mut impl Input, output: &mut impl fmt::Write) -> Result<()> {
        let enroll_id = ask(input, "Enter Enrollment No.: ")?;
        let details = ask_details(input, output)?;
        self.roster.add(Student::new(&enroll_id, details));

        print_message("Student added successfully.", output)?;
        Ok(())
    }

    fn update_student(&mut self, input: &mut impl Input, output: &mut impl fmt::Write) -> Result<()> {
        let enroll_id = ask(input, "Enter Enrollment No. of student to update: ")?;
        match self.roster.find_by_id(&enroll_id) {
            Some(student) => {
                writeln!(output, "===== Current Details =====")?;
                print_details(student, output)?;
            },
            None => {
                print_message(RosterError::not_found(&enroll_id), output)?;
                return Ok(());
            },
        }

        writeln!(output)?;
        writeln!(output, "===== Enter New Details =====")?;
        let details = ask_details(input, output)?;
        match self.roster.update(&enroll_id, details) {
            Ok(()) => print_message("Student details updated successfully.", output)?,
            Err(e) => print_message(e, output)?,
        }

        Ok(())
    }

    fn delete_student(&mut self, input: &mut impl Input, output: &mut impl fmt::Write) -> Result<()> {
        let enroll_id = ask(input, "Enter Enrollment No. of student to delete: ")?;
        match self.roster.remove_by_id(&enroll_id) {
            Ok(_) => print_message("Student deleted successfully.", output)?,
            Err(e) => print_message(e, output)?,
        }

        Ok(())
    }

    fn view_student(&self, input: &mut impl Input, output: &mut impl fmt::Write) -> Result<()> {
        let enroll_id = ask(input, "Enter Enrollment No. of student: ")?;
        match self.roster.find_by_id(&enroll_id) {
            Some(student) => {
                writeln!(output, "===== Details of {} =====", student.details().name)?;
                print_details(student, output)?;
                wait_for_enter(input)?;
            },
            None => print_message(RosterError::not_found(&enroll_id), output)?,
        }

        Ok(())
    }

    fn view_all_students(&self, input: &mut impl Input, output: &mut impl fmt::Write) -> Result<()> {
        match self.roster.list_all() {
            Some(students) => {
                print_list(students, output)?;
                wait_for_enter(input)?;
            },
            None => print_message("No students found.", output)?,
        }

        Ok(())
    }
}

fn read_choice<T: FromStr>(input: &mut impl Input) -> Result<Option<T>> {
    Ok(ask(input, CHOICE_PROMPT)?.parse().ok())
}

/// Reads a trimmed, non-empty answer. Blank lines repeat the prompt.
fn ask(input: &mut impl Input, prompt: &str) -> Result<String> {
    loop {
        let line = input.read_line(prompt)?.ok_or(ShellError::InputClosed)?;
        let line = line.trim();
        if !line.is_empty() {
            return Ok(line.to_string());
        }
    }
}

fn ask_number<T: FromStr>(input: &mut impl Input, output: &mut impl fmt::Write, prompt: &str) -> Result<T> {
    loop {
        let answer = ask(input, prompt)?;
        match answer.parse() {
            Ok(n) => return Ok(n),
            Err(_) => {
                debug!(prompt, answer = answer.as_str(), "Rejected malformed number");
                print_message(INVALID_NUMBER, output)?;
            },
        }
    }
}

fn ask_details(input: &mut impl Input, output: &mut impl fmt::Write) -> Result<Details> {
    Ok(Details {
        name: ask(input, "Enter Name: ")?,
        dob: ask(input, "Enter Date of Birth: ")?,
        email: ask(input, "Enter Email: ")?,
        phone: ask_number(input, output, "Enter Phone No.: ")?,
        branch: ask(input, "Enter Branch: ")?,
        course: ask(input, "Enter Course: ")?,
        semester: ask_number(input, output, "Enter Semester: ")?,
    })
}

fn wait_for_enter(input: &mut impl Input) -> Result<()> {
    input.read_line(CONTINUE_PROMPT)?.ok_or(ShellError::InputClosed)?;
    Ok(())
}
