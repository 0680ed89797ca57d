use crate::anim::SimulatedWheel;
use crate::config;
use crate::controller::WheelController;
use crate::roster::Roster;
use crate::spin::SpinError;
use log::{error, info};
use std::error::Error;
use std::io::{self, BufRead, Write};

pub struct App {
    controller: WheelController,
    animator: SimulatedWheel,
}

impl App {
    pub fn new(roster: Roster) -> Result<Self, Box<dyn Error>> {
        let controller = WheelController::new(roster)?;
        Ok(App {
            controller,
            animator: SimulatedWheel::new(true),
        })
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        println!("=== FAMILY ROULETTE ===");
        self.print_wheel();
        self.print_help();

        let stdin = io::stdin();
        loop {
            // The modal editor owns the input surface while it is open.
            if self.controller.is_editing() {
                print!("edit> ");
            } else {
                print!("wheel> ");
            }
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }
            let command = line.trim();
            if command.is_empty() {
                continue;
            }

            let keep_running = if self.controller.is_editing() {
                self.handle_editor_command(command)
            } else {
                self.handle_wheel_command(command)?
            };
            if !keep_running {
                break;
            }
        }

        info!("Leaving the wheel session.");
        Ok(())
    }

    fn handle_wheel_command(&mut self, command: &str) -> Result<bool, Box<dyn Error>> {
        match command {
            "s" | "spin" => self.spin()?,
            "e" | "edit" => {
                self.controller.open_editor();
                self.print_editor();
            }
            "l" | "list" => self.print_wheel(),
            "h" | "history" => self.print_history(),
            "q" | "quit" | "exit" => return Ok(false),
            "help" | "?" => self.print_help(),
            other => println!("Unknown command '{}'. Type 'help' for commands.", other),
        }
        Ok(true)
    }

    fn handle_editor_command(&mut self, command: &str) -> bool {
        match command {
            "ok" | "confirm" => {
                self.controller.confirm_edit();
                self.print_wheel();
            }
            "x" | "cancel" => {
                self.controller.cancel_edit();
                println!("Edit discarded.");
            }
            number => match number.parse::<usize>() {
                Ok(row) if row >= 1 && row <= self.controller.roster().len() => {
                    let id = self.controller.roster().members()[row - 1].profile_id;
                    self.controller.toggle_member(id);
                    self.print_editor();
                }
                _ => println!("Enter a member number, 'ok' to confirm, or 'x' to cancel."),
            },
        }
        true
    }

    fn spin(&mut self) -> Result<(), Box<dyn Error>> {
        let mut rng = rand::rng();
        let rx = match self.controller.start_spin(&mut rng, &mut self.animator) {
            Ok(rx) => rx,
            Err(SpinError::EmptyWheel) => {
                println!("Everyone is excluded. Open the editor ('edit') and re-include someone.");
                return Ok(());
            }
            Err(SpinError::AlreadySpinning) => {
                println!("The wheel is already spinning.");
                return Ok(());
            }
            Err(e) => return Err(Box::new(e)),
        };

        println!("Spinning the wheel...");
        // Single completion per rotate; blocking here is the terminal
        // stand-in for waiting on the animation callback.
        let label = rx.recv()?;
        let result = self.controller.animation_resolved(&label)?;
        match result.resolved {
            Some(member) => {
                println!();
                println!("  *** {} ***", member.nickname);
                if let Some(role) = &member.role {
                    println!("      ({})", role);
                }
                println!();
            }
            None => {
                error!("Wheel reported unknown label {:?}", result.raw_label);
                println!("Couldn't determine a result, please try again.");
            }
        }
        Ok(())
    }

    fn print_wheel(&self) {
        if self.controller.entries().is_empty() {
            println!("The wheel is empty: everyone is excluded.");
            return;
        }
        println!("On the wheel: {}", self.controller.entries().join(", "));
        let excluded: Vec<&str> = self
            .controller
            .roster()
            .members()
            .iter()
            .filter(|m| !self.controller.committed_included(m.profile_id))
            .map(|m| m.nickname.as_str())
            .collect();
        if !excluded.is_empty() {
            println!("Sitting out: {}", excluded.join(", "));
        }
    }

    fn print_editor(&self) {
        println!("Toggle members by number, then 'ok' to confirm or 'x' to cancel:");
        for (i, member) in self.controller.roster().members().iter().enumerate() {
            let mark = if self.controller.pending_included(member.profile_id) {
                "x"
            } else {
                " "
            };
            println!("  [{}] {}. {}", mark, i + 1, member.nickname);
        }
    }

    fn print_history(&self) {
        if self.controller.history().is_empty() {
            println!("No spins yet this session.");
            return;
        }
        for record in self.controller.history() {
            println!(
                "  {}  {}",
                record.at.format(config::HISTORY_TIME_FORMAT),
                record.member.nickname
            );
        }
    }

    fn print_help(&self) {
        println!("Commands: spin (s), edit (e), list (l), history (h), quit (q)");
    }
}
