//! Shared fixture: a tiny three-author organization on disk.

use std::path::Path;

pub const ORG: &str = "90210";

/// Publications: P1 by Ivanov+Petrov, P2 by Petrov+Sidorov.
/// Edges: (ivanov, petrov, w=1), (petrov, sidorov, w=1).
pub fn write_fixture_org(data_root: &Path) {
    let dir = data_root.join(ORG);
    std::fs::create_dir_all(&dir).unwrap();

    std::fs::write(
        dir.join("publications.csv"),
        "Title,Year,Source title,Cited by,Link,Authors\n\
         P1,2019,J. Graph,10,http://x/p1,\"Ivanov I.; Petrov P.\"\n\
         P2,2021,J. Net,3,http://x/p2,\"Petrov P.; Sidorov S.\"\n",
    )
    .unwrap();

    std::fs::write(
        dir.join("map.txt"),
        "id\tlabel\tx\ty\tcluster\tweight<Links>\tweight<Total link strength>\t\
         weight<Documents>\tweight<Citations>\tweight<Norm. citations>\t\
         score<Avg. pub. year>\tscore<Avg. citations>\tscore<Avg. norm. citations>\n\
         1\tivanov i.\t0.0\t0.0\t1\t1\t1\t1\t10\t1.0\t2019\t10\t1.0\n\
         2\tpetrov p.\t1.0\t1.0\t1\t2\t2\t2\t13\t1.3\t2020\t6.5\t0.65\n\
         3\tsidorov s.\t2.0\t0.5\t2\t1\t1\t1\t3\t0.3\t2021\t3\t0.3\n",
    )
    .unwrap();

    std::fs::write(dir.join("network.txt"), "1\t2\t1\n2\t3\t1\n").unwrap();
}
