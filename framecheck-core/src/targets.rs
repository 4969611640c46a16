// Built-in audit targets

/// URLs audited when no `--url` or `--hosts-file` is given, grouped by category.
pub const DEFAULT_TARGETS: &[&str] = &[
    // Cars
    "https://www.auto1.com/fr/home",
    "https://starmycar.com",
    "https://www.carcarekiosk.com/",

    // TV & streaming
    "https://wavewatch-beta-v19.vercel.app/",
    "https://desicinemas.pk/",
    "https://nakios.site/tv",
    "https://www.novovue.fr/",
    "https://moviepire.net/",
    "https://dl3.wavewatch.xyz/",
    "https://xalaflix.art/movies",
    "https://nunflix.org/",
    "https://purstream.to/",
    "https://www.empire-stream.fr/",
    "https://nova-stream.live/",
    "https://ufrov.com/",
    "https://flixer.su/",
    "https://netmirror.app/1/en",
    "https://myretrotvs.com",
    "https://tv.garden",
    "https://www.xataf.com/",
    "https://movix.website/",
    "https://www.j2n.fr/",
    "https://netaklap.com/wmu81z7hp/home/netaklap/",
    "https://xprime.tv/",
    "https://www.cineby.app/",
    "https://www.bitcine.app/",
    "https://www.fmovies.gd/home",
    "https://footballia.eu/",

    // Streaming tips
    "https://www.teleparty.com/",
    "https://www.netflix-codes.com/fr",
    "https://shotdeck.com/",

    // Live streaming
    "https://v2.gostreameast.link/",
    "https://tvpass.org/",
    "https://www.livehdtv.com/",
    "https://zhangboheng.github.io/Easy-Web-TV-M3u8/routes/countries.html",

    // Manga
    "https://v6.voiranime.com/",
    "https://kaa.to/",
    "https://hianime.to/",
    "https://animenosub.to/",

    // Software
    "https://www.downloadha.com/",
    "https://diakov.net/",
    "https://audioz.download/",
    "https://aedownload.com/",
    "https://www.downloadpirate.com/",
    "https://scloud.ws/",
    "https://starkmods.net/",

    // Gaming
    "https://arcadespot.com/",
    "https://playclassic.games/",
    "https://www.retrogames.onl/",
    "https://dodi-repacks.download/",
    "https://gog-games.to/game/parkitect",
    "https://fitgirl-repacks.site/",
    "https://online-fix.me/",
    "https://elamigos.site/#TopOfPage",
    "https://m4ckd0ge-repacks.site/index.html",
    "https://steamrip.com/",
    "https://steamgg.net/",
    "https://ankergames.net/",
    "https://builditapp.com/",
    "https://www.geo-fs.com/",
    "https://www.emugames.com/",
    "https://www.airconsole.com/",

    // Trainers
    "https://www.emuparadise.me/",
    "https://www.wemod.com/fr",
    "https://fearlessrevolution.com/",
    "https://flingtrainer.com/",

    // Books
    "https://rivestream.org/manga",
    "https://fr.z-lib.gd/",
    "https://audiobookbay.lu/",
    "https://fulllengthaudiobooks.net/",
    "https://gallica.bnf.fr",
    "https://openlibrary.org/",
    "https://librivox.org/",
    "https://www.onread.com/",
    "https://sobrief.com/",

    // Urbex
    "https://easyurbex.com/free-urbex-map/",
    "https://urbexology.com/fr.html",
    "https://urbexsession.com/",

    // Learning
    "https://www.lingohut.com/fr",
    "https://labs.google/lll/fr",
    "https://www.loecsen.com/fr",
    "https://human.biodigital.com/explore",
    "https://animagraffs.com/",
    "https://www.oldmapsonline.org/en#position=5/46.87/-1.02",
    "https://www.classcentral.com/",
    "https://www.cymath.com/",
    "https://exercism.org/",
    "https://www.wolframalpha.com/",
    "https://imagineexplainers.com/",
    "https://phet.colorado.edu/",
    "https://www.symbolab.com/",
    "https://makemydrivefun.com/",

    // Repair
    "https://fr.ifixit.com/",
    "https://fr.carcarekiosk.com/",
    "https://www.manualslib.com/",

    // Sport & fitness
    "https://www.workout.cool/fr",
    "https://darebee.com/",
    "https://musclewiki.com/fr-fr",

    // Cooking
    "https://www.chefgpt.xyz/fr",
    "https://myfridgefood.com/",
    "https://www.750g.com",
    "https://cuisine-libre.org",

    // Music & audio
    "https://radiocast.co/",
    "https://www.radio.garden",
    "https://soundation.com",
    "https://ncs.io/",
    "https://musicgpt.com/",

    // Converters
    "https://cnvmp3.com/v33",
    "https://downloadmusicschool.com/bandcamp/",
    "https://eu.doubledouble.top/",
    "https://cobalt.tools/",
    "https://ezconv.com/",
    "https://azmp3.cc/",
    "https://shailen.dedyn.io/racoon/",

    // Kids
    "https://sketch.io/sketchpad/",
    "https://colorifyai.art/",
    "https://yoprintables.com",
    "https://www.kiddoworksheets.com/",

    // Travel & culture
    "https://artsandculture.google.com/",
    "https://www.seterra.com/",
    "https://fr.gallerix.ru/",

    // Misc
    "https://tjukanovt.github.io/notable-people",

    // Tips
    "https://www.spoken.io/",
    "https://ninite.com/",
    "https://www.wifimap.io/",
    "https://geospy.ai/",

    // Phone
    "https://sms24.me/en",
    "https://receive-smss.com/",

    // Computing
    "https://tinywow.com/",
    "https://www.prepostseo.com/",

    // Real estate
    "https://www.planyourroom.com/",
    "https://app.topoexport.com/",
    "https://collov.ai/",
];
