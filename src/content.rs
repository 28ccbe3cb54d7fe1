//! Static boilerplate content for each template variant.
//!
//! The scaffolding engine treats these as opaque blobs; nothing here is
//! templated beyond simple name substitution in the container descriptor.

use std::path::PathBuf;

use crate::constants::{FILE_MODE, PROCFILE_CONTENT};
use crate::materializer::FileEntry;
use crate::variant::{PackageManager, Platform, Runtime, Variant};

const TELEGRAM_INDEX_JS: &str = r#"require("dotenv").config();
const { Telegraf } = require("telegraf");

const bot = new Telegraf(process.env.TELEGRAM_TOKEN);

bot.start((ctx) => ctx.reply("Hello from your new bot!"));
bot.help((ctx) => ctx.reply("Try /start"));

bot.launch();

process.once("SIGINT", () => bot.stop("SIGINT"));
process.once("SIGTERM", () => bot.stop("SIGTERM"));
"#;

const DISCORD_INDEX_JS: &str = r#"require("dotenv").config();
const { Client, Events, GatewayIntentBits } = require("discord.js");

const client = new Client({ intents: [GatewayIntentBits.Guilds] });

client.once(Events.ClientReady, (ready) => {
  console.log(`Logged in as ${ready.user.tag}`);
});

client.login(process.env.DISCORD_TOKEN);
"#;

const TELEGRAM_RESOURCES: &str = r#"# Resources

- [Telegram Bot API](https://core.telegram.org/bots/api)
- [Telegraf documentation](https://telegraf.js.org)
- Set `TELEGRAM_TOKEN` in your environment before running the bot.
"#;

const DISCORD_RESOURCES: &str = r#"# Resources

- [Discord Developer Portal](https://discord.com/developers/docs)
- [discord.js guide](https://discordjs.guide)
- Set `DISCORD_TOKEN` in your environment before running the bot.
"#;

/// Minimal 1x1 transparent GIF used as the project's placeholder asset.
const BOT_GIF: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xff, 0xff, 0xff, 0x21, 0xf9, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x2c,
    0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x02, 0x44, 0x01, 0x00,
    0x3b,
];

fn index_source(platform: Platform) -> &'static str {
    match platform {
        Platform::Telegram => TELEGRAM_INDEX_JS,
        Platform::Discord => DISCORD_INDEX_JS,
    }
}

fn resources(platform: Platform) -> &'static str {
    match platform {
        Platform::Telegram => TELEGRAM_RESOURCES,
        Platform::Discord => DISCORD_RESOURCES,
    }
}

fn dockerfile(variant: &Variant, bot_name: &str) -> String {
    let install = match variant.package_manager {
        PackageManager::Npm => "RUN npm install",
        PackageManager::Pnpm => "RUN corepack enable && pnpm install",
        PackageManager::Yarn => "RUN corepack enable && yarn install",
    };

    format!(
        r#"FROM node:20-alpine

WORKDIR /{bot_name}

COPY package.json .

{install}

COPY . .

CMD ["node", "./src/index.js"]
"#
    )
}

/// The fixed auxiliary file set for one variant: entry-point source, container
/// descriptor, process descriptor, resources document, and the binary asset.
pub fn project_files(variant: &Variant, bot_name: &str) -> Vec<FileEntry> {
    let Runtime::Nodejs = variant.runtime;

    vec![
        FileEntry::new(
            PathBuf::from("src/index.js"),
            index_source(variant.platform),
            FILE_MODE,
        ),
        FileEntry::new(PathBuf::from("Dockerfile"), dockerfile(variant, bot_name), FILE_MODE),
        FileEntry::new(PathBuf::from("Procfile"), PROCFILE_CONTENT, FILE_MODE),
        FileEntry::new(PathBuf::from("resources.md"), resources(variant.platform), FILE_MODE),
        FileEntry::new(PathBuf::from("src/bot.gif"), BOT_GIF, FILE_MODE),
    ]
}
