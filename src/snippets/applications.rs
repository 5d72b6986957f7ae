use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rand::Rng;
use snippet_runner::core::Snippet;

const ROOMS: u32 = 3;
const START_HP: i32 = 100;

/// Three-room text adventure.
#[derive(Debug, Default)]
pub struct MiniAdventureGame;

snippet_runner::register_snippet!(MiniAdventureGame);

impl Snippet for MiniAdventureGame {
    fn name(&self) -> &str {
        "MiniAdventureGame"
    }

    fn description(&self) -> &str {
        "Survive 3 Rooms"
    }

    fn execute(&self, _args: &[String]) -> Result<()> {
        let mut input = io::stdin().lock();
        let mut out = io::stdout().lock();
        play(&mut input, &mut out, &mut rand::rng())?;
        Ok(())
    }
}

#[derive(Debug)]
struct Adventurer {
    name: String,
    hp: i32,
    gold: i32,
}

impl Adventurer {
    const fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

fn play(input: &mut impl BufRead, out: &mut impl Write, rng: &mut impl Rng) -> Result<Adventurer> {
    writeln!(out, "Welcome to the Mini Adventure Game!")?;
    write!(out, "Enter your name, adventurer: ")?;
    out.flush()?;

    let mut player = Adventurer {
        name: read_answer(input)?,
        hp: START_HP,
        gold: 0,
    };
    writeln!(
        out,
        "\nHello {}! You have {} HP and {} gold.",
        player.name, player.hp, player.gold
    )?;
    writeln!(out, "Your quest begins...\n")?;

    for room in 1..=ROOMS {
        writeln!(out, "Room {room}")?;
        play_room(&mut player, input, out, rng)?;
        if player.is_dead() {
            writeln!(out, "You died in the dungeon!")?;
            break;
        }
        writeln!(out, "----------------------\n")?;
    }
    if !player.is_dead() {
        writeln!(out, "You've survived all the rooms!")?;
    }

    writeln!(out, "\n--- Game Over ---")?;
    writeln!(out, "Thanks for playing, {}!", player.name)?;
    writeln!(out, "Final stats: ❤️ HP = {}, 💰 Gold = {}", player.hp, player.gold)?;
    Ok(player)
}

fn play_room(
    player: &mut Adventurer,
    input: &mut impl BufRead,
    out: &mut impl Write,
    rng: &mut impl Rng,
) -> Result<()> {
    writeln!(out, "You have 3 choices:")?;
    writeln!(out, "1. Fight a monster")?;
    writeln!(out, "2. Search for treasure")?;
    writeln!(out, "3. Try to run")?;
    write!(out, "Your choice (1-3): ")?;
    out.flush()?;

    match read_answer(input)?.as_str() {
        "1" => {
            let damage = rng.random_range(10..=25);
            writeln!(out, "You fight a monster!")?;
            writeln!(out, "It hits you for {damage} damage.")?;
            player.hp -= damage;
        }
        "2" => {
            let found = rng.random_range(10..=50);
            writeln!(out, "You search the room and find treasure!")?;
            writeln!(out, "You collect {found} gold")?;
            player.gold += found;
        }
        "3" => {
            if rng.random_bool(0.5) {
                writeln!(out, "You successfully escaped!")?;
            } else {
                let penalty = rng.random_range(5..=15);
                writeln!(out, "You stumbled while running and hurt yourself!")?;
                writeln!(out, "You lose {penalty} HP.")?;
                player.hp -= penalty;
            }
        }
        _ => {
            writeln!(out, "😵 Invalid choice. You panic and lose 5 HP.")?;
            player.hp -= 5;
        }
    }
    writeln!(out, "HP: {}, Gold: {}", player.hp, player.gold)?;
    Ok(())
}

/// One trimmed line; end of input reads as an empty answer.
fn read_answer(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read answer from input")?;
    Ok(line.trim().to_string())
}
