//! The loaded game content and the driver that fills it, one data file at
//! a time, in dependency order.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use angband_types::{
    Artifact, BodyLayout, EgoItem, Feature, Flavor, HistoryChart, Maxima, MonsterBase,
    MonsterRace, ObjectBase, ObjectKind, PainMessages, PitProfile, PlayerClass, PlayerRace, Spell,
    TrapKind, Tval, Vault,
};

use crate::alloc::{AllocTables, init_alloc};
use crate::error::LoadError;
use crate::lookup;
use crate::records::DenseTable;
use crate::tables::*;

/// Every table the data files describe.
#[derive(Debug, Default)]
pub struct GameContent {
    pub maxima: Maxima,
    pub features: DenseTable<Feature>,
    pub traps: Vec<TrapKind>,
    pub object_bases: DenseTable<ObjectBase>,
    pub kinds: DenseTable<ObjectKind>,
    pub egos: DenseTable<EgoItem>,
    pub artifacts: DenseTable<Artifact>,
    pub pain: DenseTable<PainMessages>,
    pub monster_bases: Vec<MonsterBase>,
    pub monsters: DenseTable<MonsterRace>,
    pub pits: DenseTable<PitProfile>,
    pub vaults: DenseTable<Vault>,
    pub histories: Vec<HistoryChart>,
    pub races: DenseTable<PlayerRace>,
    pub classes: DenseTable<PlayerClass>,
    pub bodies: Vec<BodyLayout>,
    pub flavors: DenseTable<Flavor>,
    pub spells: DenseTable<Spell>,
    pub hints: Vec<String>,
    pub names: Vec<Vec<String>>,
    pub alloc: AllocTables,
}

impl GameContent {
    pub fn lookup_kind(&self, tval: Tval, sval: i32) -> Option<usize> {
        lookup::lookup_kind(&self.kinds, tval, sval)
    }

    pub fn lookup_sval(&self, tval: Tval, name: &str) -> Option<i32> {
        lookup::lookup_sval(&self.kinds, tval, name)
    }

    pub fn lookup_artifact_name(&self, name: &str) -> Option<usize> {
        lookup::lookup_artifact_name(&self.artifacts, name)
    }

    pub fn lookup_monster_base(&self, name: &str) -> Option<usize> {
        lookup::lookup_monster_base(&self.monster_bases, name)
    }

    /// A monster race by exact name.
    pub fn lookup_monster(&self, name: &str) -> Option<usize> {
        self.monsters
            .iter()
            .find(|(_, r)| r.name == name)
            .map(|(ridx, _)| ridx)
    }

    /// Tear every table down, last loaded first.
    pub fn cleanup(&mut self) {
        self.alloc = AllocTables::default();
        NamesParser.cleanup(self);
        HintsParser.cleanup(self);
        SpellParser.cleanup(self);
        FlavorParser.cleanup(self);
        BodyParser.cleanup(self);
        ClassParser.cleanup(self);
        RaceParser.cleanup(self);
        HistoryParser.cleanup(self);
        VaultParser.cleanup(self);
        PitParser.cleanup(self);
        MonsterParser.cleanup(self);
        MonsterBaseParser.cleanup(self);
        PainParser.cleanup(self);
        ArtifactParser.cleanup(self);
        EgoItemParser.cleanup(self);
        ObjectParser.cleanup(self);
        ObjectBaseParser.cleanup(self);
        TrapParser.cleanup(self);
        TerrainParser.cleanup(self);
        LimitsParser.cleanup(self);
    }
}

/// Where data file text comes from.
pub trait DataSource {
    /// The full text of `<name>.txt`.
    fn read(&self, name: &str) -> Result<String, LoadError>;
}

/// Data files on disk. The user directory, when set, is searched before
/// the edit directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    edit_dir: PathBuf,
    user_dir: Option<PathBuf>,
}

impl FileSource {
    pub fn new(edit_dir: impl Into<PathBuf>) -> Self {
        Self {
            edit_dir: edit_dir.into(),
            user_dir: None,
        }
    }

    pub fn with_user_dir(mut self, user_dir: impl Into<PathBuf>) -> Self {
        self.user_dir = Some(user_dir.into());
        self
    }

    /// First existing `<name>.txt` among the search directories.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let file = format!("{name}.txt");
        self.user_dir
            .iter()
            .chain(std::iter::once(&self.edit_dir))
            .map(|dir| dir.join(&file))
            .find(|path| path.is_file())
    }
}

impl DataSource for FileSource {
    fn read(&self, name: &str) -> Result<String, LoadError> {
        let path = self.resolve(name).ok_or_else(|| LoadError::NoFileFound {
            name: name.to_string(),
        })?;
        log::debug!("reading {}", path.display());
        fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })
    }
}

/// Data file text held in memory, keyed by file name without extension.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.files.insert(name.into(), text.into());
        self
    }
}

impl DataSource for MemorySource {
    fn read(&self, name: &str) -> Result<String, LoadError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| LoadError::NoFileFound {
                name: name.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Stop at the first table that fails to load.
    pub fail_fast: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}

/// What a load did: records per table, in load order, and the tables that
/// were skipped in best-effort mode.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<(&'static str, usize)>,
    pub failures: Vec<LoadError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn count(&self, table: &str) -> Option<usize> {
        self.loaded
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, n)| *n)
    }
}

/// Load one data file into `content`: parse it line by line, finish the
/// table and commit it.
pub fn run_parser<P: FileParser>(
    parser: &P,
    source: &dyn DataSource,
    content: &mut GameContent,
) -> Result<usize, LoadError> {
    let table = parser.name();
    let text = source.read(table)?;
    let output = {
        let mut p = parser
            .init(content)
            .map_err(|source| LoadError::Schema { table, source })?;
        for line in text.lines() {
            if let Err(source) = p.parse(line) {
                return Err(LoadError::Parse {
                    table,
                    line: p.line(),
                    col: p.col(),
                    source,
                });
            }
        }
        log::debug!("finishing {table} after {} lines", p.line());
        parser
            .finish(p.into_state())
            .map_err(|source| LoadError::Finish { table, source })?
    };
    let n = parser.commit(output, content);
    log::info!("loaded {n} records from {table}.txt");
    Ok(n)
}

struct Loader<'s> {
    source: &'s dyn DataSource,
    options: LoadOptions,
    content: GameContent,
    report: LoadReport,
}

impl Loader<'_> {
    fn load<P: FileParser>(&mut self, parser: P) -> Result<(), LoadError> {
        match run_parser(&parser, self.source, &mut self.content) {
            Ok(n) => {
                self.report.loaded.push((parser.name(), n));
                Ok(())
            }
            Err(e) if self.options.fail_fast => Err(e),
            Err(e) => {
                log::warn!("skipping {}: {e}", parser.name());
                parser.cleanup(&mut self.content);
                self.report.failures.push(e);
                Ok(())
            }
        }
    }
}

/// Load every data file in dependency order, then build the allocation
/// tables.
pub fn init_arrays(
    source: &dyn DataSource,
    options: LoadOptions,
) -> Result<(GameContent, LoadReport), LoadError> {
    let mut l = Loader {
        source,
        options,
        content: GameContent::default(),
        report: LoadReport::default(),
    };
    l.load(LimitsParser)?;
    l.load(TerrainParser)?;
    l.load(TrapParser)?;
    l.load(ObjectBaseParser)?;
    l.load(ObjectParser)?;
    l.load(EgoItemParser)?;
    l.load(ArtifactParser)?;
    l.load(PainParser)?;
    l.load(MonsterBaseParser)?;
    l.load(MonsterParser)?;
    l.load(PitParser)?;
    l.load(VaultParser)?;
    l.load(HistoryParser)?;
    l.load(RaceParser)?;
    l.load(ClassParser)?;
    l.load(BodyParser)?;
    l.load(FlavorParser)?;
    l.load(SpellParser)?;
    l.load(HintsParser)?;
    l.load(NamesParser)?;

    match init_alloc(&l.content) {
        Ok(alloc) => l.content.alloc = alloc,
        Err(source) => {
            let e = LoadError::Finish {
                table: "allocation",
                source,
            };
            if l.options.fail_fast {
                return Err(e);
            }
            log::warn!("skipping allocation tables: {e}");
            l.report.failures.push(e);
        }
    }
    Ok((l.content, l.report))
}

/// Load from an edit directory on disk.
pub fn load_dir(edit_dir: &Path, options: LoadOptions) -> Result<(GameContent, LoadReport), LoadError> {
    init_arrays(&FileSource::new(edit_dir), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    fn minimal() -> MemorySource {
        let mut src = MemorySource::new();
        src.insert("limits", "M:F:4\nM:K:10\n")
            .insert("terrain", "N:0:nothing\nG: :w\nN:1:open floor\nG:.:w\n")
            .insert("trap", "name:trap door:trap door\nappear:1:2:0\n")
            .insert("object_base", "N:sword:Bladed Weapon~\nN:magic book:Magic Book~\n")
            .insert(
                "object",
                "N:1:& Dagger~\nG:|:W\nI:sword:1\nW:0:0:12:10\nA:40:0 to 100\n\
                 N:2:& Magic for Beginners~\nG:?:R\nI:magic book:1\nA:40:5 to 50\n",
            )
            .insert("ego_item", "N:1:of Slay Evil\nW:10:3:0:0\nT:sword:1:2\n")
            .insert("artifact", "N:1:'Sting'\nI:sword:Dagger\nW:20:15:12:10000\n")
            .insert("pain", "N:1\nM:shrugs off the attack.\n")
            .insert("monster_base", "N:person\nG:p\nM:1\n")
            .insert(
                "monster",
                "N:1:Farmer Maggot\nT:person\nC:U\nW:2:4:0:0\nN:2:Grip, Farmer Maggot's Dog\nT:person\nC:U\nW:0:1:0:30\n",
            )
            .insert("pit", "N:1:Farmhands\nR:1\nA:1:0\nT:person\n")
            .insert("vault", "N:1:Lesser vault\nX:6:5:2:3\nD:###\nD:###\n")
            .insert("p_hist", "N:1:0:100:50\nD:You are a Serf.\n")
            .insert("p_race", "N:0:Human\nI:1:15:10\n")
            .insert("p_class", "N:0:Mage\nE:sword:Dagger:1:1\n")
            .insert("body", "body:Humanoid\nslot:WEAPON:weapon\n")
            .insert("flavor", "N:1:magic book:1\nG:?:R\n")
            .insert("spell", "N:0:Magic Missile\nI:90:1:0\n")
            .insert("hints", "H:Be careful.\n")
            .insert("names", "N:1\nD:adanedhel\n");
        src
    }

    #[test]
    fn loads_in_order() {
        let (content, report) = init_arrays(&minimal(), LoadOptions::default()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.loaded.len(), 20);
        assert_eq!(report.loaded[0].0, "limits");
        assert_eq!(report.count("object"), Some(2));
        assert_eq!(report.count("artifact"), Some(1));
        assert_eq!(content.lookup_artifact_name("sting"), Some(1));
        assert_eq!(content.kinds.get(2).unwrap().spells, vec![0]);
        assert_eq!(content.lookup_monster("Farmer Maggot"), Some(1));
        assert_eq!(content.lookup_kind(Tval::Sword, 1), Some(1));
        assert_eq!(content.alloc.monsters.len(), 2);
        assert_eq!(content.races.get(0).unwrap().history, Some(0));
    }

    #[test]
    fn fail_fast_reports_position() {
        let mut src = minimal();
        src.insert("terrain", "N:0:nothing\nG: :w\n\nX:0:0:0:0:0\nQ:1\n");
        let e = init_arrays(&src, LoadOptions::default()).unwrap_err();
        match &e {
            LoadError::Parse {
                table, line, col, ..
            } => assert_eq!((*table, *line, *col), ("terrain", 5, 1)),
            other => panic!("unexpected {other}"),
        }
        assert_eq!(e.parse_kind(), Some(ParseErrorKind::UndefinedDirective));
    }

    #[test]
    fn best_effort_skips_failed_tables() {
        let mut src = minimal();
        src.insert("hints", "H:fine\nX:broken\n");
        src.files.remove("names");
        let (content, report) = init_arrays(&src, LoadOptions { fail_fast: false }).unwrap();
        assert_eq!(report.failures.len(), 2);
        assert_eq!(
            report.failures[1].parse_kind(),
            Some(ParseErrorKind::NoFileFound)
        );
        assert!(content.hints.is_empty());
        assert!(content.names.is_empty());
        assert_eq!(content.monsters.count(), 2);
    }

    #[test]
    fn cleanup_empties_everything() {
        let (mut content, _) = init_arrays(&minimal(), LoadOptions::default()).unwrap();
        content.cleanup();
        assert!(content.kinds.is_empty());
        assert!(content.monster_bases.is_empty());
        assert!(content.hints.is_empty());
        assert!(content.alloc.monsters.is_empty());
        assert_eq!(content.maxima, Maxima::NONE);
    }

    #[test]
    fn missing_file() {
        let src = FileSource::new("/nonexistent/edit");
        assert!(matches!(
            src.read("limits"),
            Err(LoadError::NoFileFound { name }) if name == "limits"
        ));
    }
}
