//! Terminal front-end for a two-player game on one keyboard.
//!
//! The core only sees squares and promotion choices; this binary owns the
//! prompt/render loop, converts typed coordinates like `e2` into squares
//! and narrates the effects the session emits.

use std::io::{self, BufRead, Write};

use chrono::prelude::*;
use clap::Parser;
use color_eyre::Result;
use once_cell::sync::Lazy;

use local_chess::session::{Effect, Session};
use local_chess::types::{PieceKind, Square, PROMOTION_CHOICES};

#[derive(Parser, Debug)]
#[command(name = "local_chess")]
#[command(about = "Two-player chess at one terminal")]
struct Args {
    /// Draw pieces as ASCII letters instead of Unicode figurines
    #[arg(long)]
    ascii: bool,
}

/// One menu line built from the promotion choices, e.g. "[q]ueen [r]ook ...".
static PROMOTION_MENU: Lazy<String> = Lazy::new(|| {
    PROMOTION_CHOICES
        .iter()
        .map(|kind| {
            let name = kind.to_human();
            let initial = match kind {
                // 'k' would collide with the king
                PieceKind::Knight => 'n',
                _ => name.chars().next().unwrap(),
            };
            let split = name.find(initial).unwrap();
            format!("{}[{}]{}", &name[..split], initial, &name[split + 1..])
        })
        .collect::<Vec<_>>()
        .join(" ")
});

fn draw_session(session: &Session, ascii: bool) {
    let selection = session.selection();
    println!();
    for row in 0..8u8 {
        print!("{} ", 8 - row);
        for col in 0..8u8 {
            let square = Square::new(row, col);
            let glyph = match session.board().piece_at(square) {
                Some(piece) if ascii => piece.to_letter().to_string(),
                Some(piece) => piece.to_symbol().to_string(),
                None => ".".to_string(),
            };
            match selection {
                Some((from, _)) if from == square => print!("[{glyph}]"),
                Some((_, destinations)) if destinations.contains(&square) => {
                    print!("*{glyph}*")
                }
                _ => print!(" {glyph} "),
            }
        }
        println!();
    }
    println!("   a  b  c  d  e  f  g  h");
}

fn narrate(session: &Session, effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::Selected { .. } | Effect::Deselected => {}
            Effect::MoveApplied { from, to } => {
                // the mover is already sitting on `to`
                if let Some(piece) = session.board().piece_at(*to) {
                    println!(
                        "{} moves {} from {} to {}",
                        piece.color.to_human(),
                        piece.kind.to_human(),
                        from.to_algebraic(),
                        to.to_algebraic()
                    );
                }
            }
            Effect::PromotionPending { square, color } => {
                println!(
                    "{} pawn on {} must promote",
                    color.to_human(),
                    square.to_algebraic()
                );
            }
            Effect::PromotionResolved { square, kind } => {
                println!("promoted to {} on {}", kind.to_human(), square.to_algebraic());
            }
            Effect::TurnPassed { side_to_move } => {
                println!("{} to move", side_to_move.to_human());
            }
        }
    }
}

/// Accept either the menu initial ("n") or the spelled-out name ("knight").
/// A bare "k" means nothing here: the king is not a promotion choice.
fn parse_promotion_choice(input: &str) -> Option<PieceKind> {
    PROMOTION_CHOICES.into_iter().find(|kind| {
        input == kind.to_human()
            || input.len() == 1
                && input.chars().next().and_then(PieceKind::from_char) == Some(*kind)
    })
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    println!(
        "local_chess - game started {}",
        Local::now().format("%Y-%m-%d %H:%M")
    );
    println!("Type a square (e.g. e2) to select or move, Ctrl-D to quit.");

    let mut session = Session::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        draw_session(&session, args.ascii);

        if let Some((square, color)) = session.pending_promotion() {
            print!(
                "{} promotes on {}: {} > ",
                color.to_human(),
                square.to_algebraic(),
                *PROMOTION_MENU
            );
        } else {
            match session.selection() {
                Some((from, _)) => print!(
                    "{} moves {} to > ",
                    session.side_to_move().to_human(),
                    from.to_algebraic()
                ),
                None => print!("{} selects > ", session.side_to_move().to_human()),
            }
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?.trim().to_lowercase();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        let effects = if session.pending_promotion().is_some() {
            match parse_promotion_choice(&input) {
                Some(kind) => session.choose_promotion(kind),
                None => {
                    println!("pick one of: {}", *PROMOTION_MENU);
                    continue;
                }
            }
        } else {
            match Square::from_algebraic(&input) {
                Some(square) => session.handle_click(square),
                None => {
                    println!("squares look like e2");
                    continue;
                }
            }
        };
        narrate(&session, &effects);
    }

    Ok(())
}
