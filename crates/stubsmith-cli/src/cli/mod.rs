//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use stubsmith_core::{
    application::WritePolicy,
    domain::{ArtifactKind, FieldSpec, parse_fields},
};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stubsmith",
    bin_name = "stubsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Stub-driven code generator for Laravel projects",
    long_about = "Stubsmith fills PHP stubs to generate classes, repositories, services, \
                  controllers, resources, language files and complete CRUD stacks.",
    after_help = "EXAMPLES:\n\
        \x20 stubsmith repository-make Post --model=Post\n\
        \x20 stubsmith controller-make PostController --model=Post -r -R\n\
        \x20 stubsmith crud-make Article --fields=\"title:string,published:boolean\"\n\
        \x20 stubsmith completions bash > /usr/share/bash-completion/completions/stubsmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a class, trait or interface.
    #[command(after_help = "EXAMPLES:\n\
            \x20 stubsmith class-make Support/Money\n\
            \x20 stubsmith class-make Contracts/Payable --kind=interface")]
    ClassMake(ClassMakeArgs),

    /// Create a repository, optionally bound to a model.
    #[command(after_help = "EXAMPLES:\n\
            \x20 stubsmith repository-make Post --model=Post\n\
            \x20 stubsmith repository-make PostRepository --model=Post --module=Blog")]
    RepositoryMake(RepositoryMakeArgs),

    /// Create a service class.
    ServiceMake(ModuleScopedArgs),

    /// Create an API resource class.
    ResourceMake(ModuleScopedArgs),

    /// Create a controller, optionally wired to a model's repository and resource.
    #[command(after_help = "EXAMPLES:\n\
            \x20 stubsmith controller-make Admin/DashboardController\n\
            \x20 stubsmith controller-make PostController --model=Post -r -R")]
    ControllerMake(ControllerMakeArgs),

    /// Create an empty file; dots in the name are directories.
    #[command(after_help = "EXAMPLES:\n\
            \x20 stubsmith file-make config.payments\n\
            \x20 stubsmith file-make resources.js.app --ext=js")]
    FileMake(FileMakeArgs),

    /// Create a language file.
    #[command(after_help = "EXAMPLES:\n\
            \x20 stubsmith lang-make messages --locale=fr\n\
            \x20 stubsmith lang-make --json --locale=de")]
    LangMake(LangMakeArgs),

    /// Create model, repository, service, controller, views and routes.
    #[command(after_help = "EXAMPLES:\n\
            \x20 stubsmith crud-make Article --fields=\"title:string,body:text,published:boolean\"")]
    CrudMake(CrudArgs),

    /// Like crud-make, with a resource class and shared generic views.
    ResourceCrudMake(CrudArgs),

    /// List the available stubs or publish them for customisation.
    #[command(after_help = "EXAMPLES:\n\
            \x20 stubsmith stubs\n\
            \x20 stubsmith stubs --publish            # copy builtins to ./stubs\n\
            \x20 stubsmith --stubs=custom stubs --publish")]
    Stubs(StubsArgs),

    /// Initialise a Stubsmith configuration file.
    #[command(after_help = "EXAMPLES:\n\
            \x20 stubsmith init           # ./stubsmith.toml\n\
            \x20 stubsmith init --global  # per-user config")]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(after_help = "EXAMPLES:\n\
            \x20 stubsmith completions bash > ~/.local/share/bash-completion/completions/stubsmith\n\
            \x20 stubsmith completions zsh  > ~/.zfunc/_stubsmith\n\
            \x20 stubsmith completions fish > ~/.config/fish/completions/stubsmith.fish")]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stubsmith config get layout.kinds.model\n\
            \x20 stubsmith config list"
    )]
    Config(ConfigCommands),
}

// ── shared flags ──────────────────────────────────────────────────────────────

/// Overwrite behaviour shared by every generator.
#[derive(Debug, Clone, Copy, Args)]
pub struct WriteArgs {
    /// Replace existing files without asking.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Report what would be written without touching the disk.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

impl WriteArgs {
    pub fn policy(&self) -> WritePolicy {
        WritePolicy::ask()
            .with_force(self.force)
            .with_dry_run(self.dry_run)
    }
}

// ── generators ────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ClassMakeArgs {
    /// Path-like name; `Foo/Bar` gives `Foo/Bar.php` in namespace `Foo`.
    #[arg(value_name = "FILENAME")]
    pub filename: String,

    #[arg(long = "kind", value_enum, default_value = "class")]
    pub kind: ClassKind,

    #[command(flatten)]
    pub write: WriteArgs,
}

/// What `class-make` declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassKind {
    Class,
    Trait,
    Interface,
}

impl From<ClassKind> for ArtifactKind {
    fn from(kind: ClassKind) -> Self {
        match kind {
            ClassKind::Class => ArtifactKind::Class,
            ClassKind::Trait => ArtifactKind::Trait,
            ClassKind::Interface => ArtifactKind::Interface,
        }
    }
}

#[derive(Debug, Args)]
pub struct RepositoryMakeArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Existing model the repository works on.
    #[arg(long = "model", value_name = "MODEL")]
    pub model: Option<String>,

    /// Module under `Modules/` to generate into.
    #[arg(long = "module", value_name = "MODULE")]
    pub module: Option<String>,

    #[command(flatten)]
    pub write: WriteArgs,
}

/// `service-make` and `resource-make`.
#[derive(Debug, Args)]
pub struct ModuleScopedArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    #[arg(long = "module", value_name = "MODULE")]
    pub module: Option<String>,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Debug, Args)]
pub struct ControllerMakeArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Create `<Model>Repository` when it does not exist.
    #[arg(short = 'r', long = "repository", requires = "model")]
    pub repository: bool,

    /// Create `<Model>Resource` when it does not exist.
    #[arg(short = 'R', long = "resource", requires = "model")]
    pub resource: bool,

    #[arg(long = "model", value_name = "MODEL")]
    pub model: Option<String>,

    #[arg(long = "module", value_name = "MODULE")]
    pub module: Option<String>,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Debug, Args)]
pub struct FileMakeArgs {
    #[arg(value_name = "FILENAME")]
    pub filename: String,

    /// Extension, with or without the leading dot.
    #[arg(long = "ext", value_name = "EXT", default_value = "php")]
    pub ext: String,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Debug, Args)]
pub struct LangMakeArgs {
    /// File name; required unless `--json` is given.
    #[arg(value_name = "NAME", required_unless_present = "json")]
    pub name: Option<String>,

    #[arg(long = "locale", value_name = "LOCALE", default_value = "en")]
    pub locale: String,

    /// Write `<locale>.json` instead of a PHP array file.
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub write: WriteArgs,
}

/// `crud-make` and `resource-crud-make`.
#[derive(Debug, Args)]
pub struct CrudArgs {
    /// Entity name, e.g. `Article`.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Comma-separated `name:type` pairs.
    #[arg(long = "fields", value_name = "FIELDS")]
    pub fields: Option<String>,

    #[command(flatten)]
    pub write: WriteArgs,
}

impl CrudArgs {
    pub fn field_specs(&self) -> Vec<FieldSpec> {
        parse_fields(self.fields.as_deref())
    }
}

// ── stubs ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StubsArgs {
    /// Copy the builtin stubs into the custom stub directory.
    #[arg(long = "publish")]
    pub publish: bool,

    /// Replace stubs that were already published.
    #[arg(short = 'f', long = "force", requires = "publish")]
    pub force: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the per-user config location instead of the project root.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `layout.kinds.model`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the path of the configuration file in use.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
