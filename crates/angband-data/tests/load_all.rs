use std::fs;
use std::path::{Path, PathBuf};

use angband_data::{
    FileSource, GameContent, LoadError, LoadOptions, LoadReport, MemorySource, init_arrays,
    load_dir,
};
use angband_rng::GameRng;
use angband_types::{MonsterFlags, MonsterSpellFlags, Tval};

const EDIT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../lib/edit");

const TABLES: [&str; 20] = [
    "limits",
    "terrain",
    "trap",
    "object_base",
    "object",
    "ego_item",
    "artifact",
    "pain",
    "monster_base",
    "monster",
    "pit",
    "vault",
    "p_hist",
    "p_race",
    "p_class",
    "body",
    "flavor",
    "spell",
    "hints",
    "names",
];

fn load() -> (GameContent, LoadReport) {
    load_dir(Path::new(EDIT_DIR), LoadOptions::default()).expect("load lib/edit")
}

/// Every shipped data file, held in memory.
fn shipped() -> MemorySource {
    let mut source = MemorySource::new();
    for table in TABLES {
        let path = Path::new(EDIT_DIR).join(format!("{table}.txt"));
        let text = fs::read_to_string(&path).unwrap_or_else(|_| panic!("read {}", path.display()));
        source.insert(table, text);
    }
    source
}

#[test]
fn every_table_loads_in_order() {
    let (content, report) = load();
    assert!(report.is_clean(), "failures: {:?}", report.failures);
    let order: Vec<&str> = report.loaded.iter().map(|(t, _)| *t).collect();
    assert_eq!(order, TABLES);
    for (table, n) in &report.loaded {
        assert!(*n > 0, "{table} loaded nothing");
    }
    assert_eq!(report.count("terrain"), Some(15));
    assert_eq!(report.count("trap"), Some(5));
    assert_eq!(content.maxima.r_max, 600);
}

#[test]
fn carcharoth_keeps_his_index() {
    let (content, _) = load();
    let ridx = content
        .lookup_monster("Carcharoth, the Jaws of Thirst")
        .expect("Carcharoth");
    assert_eq!(ridx, 544);

    let race = content.monsters.get(ridx).unwrap();
    assert_eq!(race.speed, 7);
    assert_eq!(race.avg_hp, 500);
    assert_eq!(race.level, 76);
    assert_eq!(race.blows.len(), 4);
    assert_eq!(race.freq_spell, 20);
    assert!(race.spell_flags.contains(MonsterSpellFlags::BR_FIRE));

    // Base flags are folded into the race.
    let base = &content.monster_bases[race.base.unwrap()];
    assert_eq!(base.name, "canine");
    assert!(race.flags.contains(MonsterFlags::ANIMAL | MonsterFlags::UNIQUE));
    assert_eq!(race.glyph, 'C');

    let ringil = content.lookup_artifact_name("Ringil").unwrap();
    assert_eq!(race.drops.len(), 1);
    assert_eq!(race.drops[0].artifact, Some(ringil));
    assert_eq!(race.drops[0].kind, content.artifacts.get(ringil).unwrap().kind);
}

#[test]
fn monster_references_resolve() {
    let (content, _) = load();
    for (ridx, race) in content.monsters.iter() {
        let base = race.base.unwrap_or_else(|| panic!("monster {ridx} has no base"));
        assert!(base < content.monster_bases.len());
        for drop in &race.drops {
            let kidx = drop.kind.unwrap_or_else(|| panic!("monster {ridx} drops nothing"));
            assert!(content.kinds.get(kidx).is_some());
        }
    }
    for base in &content.monster_bases {
        assert!(content.pain.get(base.pain).is_some(), "{} has no pain", base.name);
    }
    for (_, pit) in content.pits.iter() {
        assert!(!pit.bases.is_empty());
        assert!(pit.bases.iter().all(|&b| b < content.monster_bases.len()));
    }
}

#[test]
fn artifacts_without_kinds_get_special_ones() {
    let (content, _) = load();
    let phial = content.lookup_artifact_name("of Galadriel").unwrap();
    let art = content.artifacts.get(phial).unwrap();
    let kind = content.kinds.get(art.kind.unwrap()).unwrap();
    assert_eq!(kind.tval, Some(Tval::Light));
    assert_eq!(kind.name, "& Phial~");
    assert_eq!(kind.sval, art.sval);

    let sting = content.lookup_artifact_name("'Sting'").unwrap();
    let dagger = content.lookup_kind(Tval::Sword, 1);
    assert_eq!(content.artifacts.get(sting).unwrap().kind, dagger);

    for (aidx, art) in content.artifacts.iter() {
        let kidx = art.kind.unwrap_or_else(|| panic!("artifact {aidx} has no kind"));
        let kind = content.kinds.get(kidx).unwrap();
        assert_eq!((kind.tval, kind.sval), (art.tval, art.sval));
    }
}

#[test]
fn spells_link_to_their_books() {
    let (content, _) = load();
    let beginners = content.lookup_kind(Tval::MagicBook, 1).unwrap();
    let conjurings = content.lookup_kind(Tval::MagicBook, 2).unwrap();
    let handbook = content.lookup_kind(Tval::PrayerBook, 1).unwrap();
    assert_eq!(content.kinds.get(beginners).unwrap().spells, vec![0, 1, 2]);
    assert_eq!(content.kinds.get(conjurings).unwrap().spells, vec![3]);
    assert_eq!(content.kinds.get(handbook).unwrap().spells, vec![4, 5]);

    let cloud = content.spells.get(3).unwrap();
    assert_eq!(cloud.name, "Stinking Cloud");
    assert_eq!((cloud.realm, cloud.spell_index), (0, 3));
    let bless = content.spells.get(5).unwrap();
    assert_eq!((bless.realm, bless.spell_index), (1, 1));
}

#[test]
fn player_tables() {
    let (content, _) = load();
    let dwarf = content.races.get(2).unwrap();
    assert_eq!(dwarf.name, "Dwarf");
    assert_eq!(dwarf.choice, 0b101);
    let chart = &content.histories[dwarf.history.unwrap()];
    assert_eq!(chart.idx, 4);

    // Charts may point at charts defined further down the file.
    for chart in &content.histories {
        for entry in &chart.entries {
            match entry.succ {
                Some(succ) => assert_eq!(content.histories[succ].idx, entry.next),
                None => assert_eq!(entry.next, 0),
            }
        }
    }

    let mage = content.classes.get(1).unwrap();
    assert_eq!(mage.magic.spell_book, Some(Tval::MagicBook));
    assert_eq!(mage.magic.spells.len(), 4);
    assert_eq!(mage.titles.len(), 10);
    assert_eq!(mage.start_items.len(), 3);

    assert_eq!(content.bodies.len(), 1);
    assert_eq!(content.bodies[0].slots.len(), 12);
}

#[test]
fn flavors_hints_and_names() {
    let (content, _) = load();
    let clear = content.flavors.get(1).unwrap();
    assert_eq!((clear.tval, clear.sval), (Tval::Potion, Some(1)));
    assert_eq!(content.flavors.get(8).unwrap().sval, None);

    assert_eq!(content.hints.len(), 4);
    assert_eq!(content.names.len(), 3);
    assert!(content.names[0].is_empty());
    assert_eq!(content.names[1].len(), 8);
    assert_eq!(content.names[2][0], "ab");
}

#[test]
fn allocation_tables_are_usable() {
    let (content, _) = load();
    assert!(!content.alloc.objects.is_empty());
    assert!(!content.alloc.monsters.is_empty());
    assert!(!content.alloc.egos.is_empty());

    // Only town monsters can appear in town.
    let mut rng = GameRng::new(42);
    for _ in 0..50 {
        let ridx = content.alloc.monsters.pick(0, &mut rng).expect("a town monster");
        assert!(content.monsters.get(ridx).unwrap().level <= 0);
    }
    let deep = content.lookup_monster("Carcharoth, the Jaws of Thirst").unwrap();
    assert!(
        content.alloc.monsters.entries().iter().any(|e| e.index == deep),
        "uniques still allocate"
    );
}

#[test]
fn cleanup_releases_everything() {
    let (mut content, _) = load();
    content.cleanup();
    assert!(content.monsters.is_empty());
    assert!(content.kinds.is_empty());
    assert!(content.histories.is_empty());
    assert!(content.alloc.monsters.is_empty());
}

/// A scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("angband-data-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn user_directory_overrides_edit_files() {
    let user = scratch_dir("user");
    fs::write(user.join("hints.txt"), "H:Only one hint here.\n").unwrap();

    let source = FileSource::new(EDIT_DIR).with_user_dir(&user);
    let (content, report) = init_arrays(&source, LoadOptions::default()).unwrap();
    assert!(report.is_clean());
    assert_eq!(content.hints, vec!["Only one hint here.".to_string()]);
    // Everything else still comes from the edit directory.
    assert_eq!(report.count("monster"), Some(10));

    fs::remove_dir_all(&user).unwrap();
}

#[test]
fn undeclared_limits_follow_the_tables() {
    let mut source = shipped();
    source.insert("limits", "V:1\n");
    let (content, report) = init_arrays(&source, LoadOptions::default()).unwrap();
    assert!(report.is_clean(), "failures: {:?}", report.failures);
    assert_eq!(report.count("limits"), Some(0));

    let z = content.maxima;
    assert_ne!(z.r_max, 0);
    assert_ne!(z.k_max, 0);
    assert_eq!(z.r_max, content.monsters.len());
    assert_eq!(z.k_max, content.kinds.len());
    assert_eq!(z.f_max, content.features.len());
    assert_eq!(z.a_max, content.artifacts.len());
    assert_eq!(z.e_max, content.egos.len());
    assert_eq!(z.pit_max, content.pits.len());
    assert_eq!(z.s_max, content.spells.len());
}

#[test]
fn broken_table_stops_the_load() {
    let mut source = shipped();
    source.insert("pit", "N:1:Orc pit\nT:balrog\n");
    let err = init_arrays(&source, LoadOptions::default()).unwrap_err();
    match &err {
        LoadError::Parse {
            table, line, col, ..
        } => assert_eq!((*table, *line, *col), ("pit", 2, 2)),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn best_effort_load_skips_broken_tables() {
    let mut source = shipped();
    source.insert("monster", "N:1:Nobody\nT:unknown\n");
    let options = LoadOptions { fail_fast: false };
    let (content, report) = init_arrays(&source, options).unwrap();

    let failed: Vec<Option<&str>> = report.failures.iter().map(|e| e.table()).collect();
    assert_eq!(failed, vec![Some("monster"), Some("allocation")]);
    assert_eq!(report.count("monster"), None);
    assert!(content.monsters.is_empty());
    // Later tables still load.
    assert_eq!(report.count("p_class"), Some(4));
    assert_eq!(content.names[1].len(), 8);
}
