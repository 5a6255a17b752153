//! Interactive shell.
//!
//! Reads menu commands until `haetta` or end of input. Informational output
//! goes to `out`, error messages to `err`. A failed operation is reported and
//! the shell keeps going.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use shopcart::{Session, ShopError, flows};
use shopcart_core::format_product_line;

use crate::console::Console;

const MENU_LABEL: &str = ">";

const HELP: &str = "\
Skipanir:
  vorur (list)            Sýna vörur
  ny (add)                Búa til nýja vöru
  kaupa (buy)             Bæta vöru í körfu
  karfa (cart)            Sýna körfu
  greida (checkout)       Ganga frá pöntun
  endurstilla (reset)     Byrja upp á nýtt
  hjalp (help)            Sýna þessa hjálp
  haetta (quit)           Hætta";

/// A command typed at the shell prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    Add,
    Buy,
    Cart,
    Checkout,
    Reset,
    Help,
    Quit,
}

impl FromStr for MenuCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vorur" | "vörur" | "list" => Ok(Self::List),
            "ny" | "ný" | "add" => Ok(Self::Add),
            "kaupa" | "buy" => Ok(Self::Buy),
            "karfa" | "cart" => Ok(Self::Cart),
            "greida" | "greiða" | "checkout" => Ok(Self::Checkout),
            "endurstilla" | "reset" => Ok(Self::Reset),
            "hjalp" | "hjálp" | "help" | "?" => Ok(Self::Help),
            "haetta" | "hætta" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("Óþekkt skipun: {other}. Sláðu inn 'hjalp' fyrir hjálp.")),
        }
    }
}

/// Run the shell until the shopper quits or input ends.
///
/// # Errors
///
/// Returns an error only if writing output fails.
pub fn run<R, W, E>(session: &mut Session, input: R, out: W, mut err: E) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut console = Console::new(input, out);
    console.say(HELP)?;

    while let Some(line) = console.read_line(MENU_LABEL)? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<MenuCommand>() {
            Ok(MenuCommand::Quit) => break,
            Ok(command) => execute(session, command, &mut console, &mut err)?,
            Err(message) => writeln!(err, "{message}")?,
        }
    }

    tracing::debug!("Shell finished");
    Ok(())
}

fn execute<R, W, E>(
    session: &mut Session,
    command: MenuCommand,
    console: &mut Console<R, W>,
    err: &mut E,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    tracing::debug!(?command, "Executing command");
    match command {
        MenuCommand::List => {
            for line in session.catalog().listing() {
                console.say(line)?;
            }
        }
        MenuCommand::Add => match flows::add_product(session, console) {
            Ok(product) => console.say(flows::product_added_message(&product))?,
            Err(e) => report(err, &e)?,
        },
        MenuCommand::Buy => match flows::add_to_cart(session, console) {
            Ok(line) => console.say(format!(
                "Í körfu: {}",
                format_product_line(&line.product, Some(line.quantity))
            ))?,
            Err(e) => report(err, &e)?,
        },
        MenuCommand::Cart => console.say(session.cart_summary())?,
        MenuCommand::Checkout => match flows::checkout(session, console) {
            Ok(order) => console.say(order)?,
            Err(e) => report(err, &e)?,
        },
        MenuCommand::Reset => {
            session.reset();
            console.say("Búðin hefur verið endurstillt.")?;
        }
        MenuCommand::Help => console.say(HELP)?,
        MenuCommand::Quit => {}
    }
    Ok(())
}

fn report<E: Write>(err: &mut E, error: &ShopError) -> io::Result<()> {
    tracing::warn!(kind = error.kind(), error = %error, "Operation rejected");
    writeln!(err, "{error}")
}
