pub use conlang::*;
pub use script::*;

mod script {
    /// Glyph a vowel sits on when no consonant follows it. Also stands in for
    /// any non-letter left inside a word.
    pub const SPECIAL_GLYPHS: &str = "\
role,glyph
carrier,`
numeral,`````
suffix-e,O
suffix-s,_
error,\u{fffd}";

    pub const IRREGULAR_WORDS: &str = "\
word,glyph
of,W
the,@";

    pub const CONSONANTS: &str = "\
letter,marker,glyph
t,plain,1
d,plain,2
n,plain,5
r,plain,6
r,pre-vowel,7
h,plain,9
p,plain,q
b,plain,w
f,plain,e
v,plain,r
m,plain,t
w,plain,y
s,plain,i
c,soft,i
j,plain,s
g,soft,s
l,plain,j
y,consonantal,l
k,plain,z
c,hard,z
g,plain,x
z,plain,\",\"
x,plain,z\u{e6}";

    pub const DIGRAPHS: &str = "\
first,first_marker,second,second_marker,glyph
s,plain,h,plain,d
z,plain,h,plain,f
c,plain,h,plain,a
c,digraph-start,h,plain,a
p,plain,h,plain,e
k,plain,h,plain,c
g,plain,h,plain,v
w,plain,h,plain,o
n,plain,g,plain,b
r,plain,d,plain,u
l,plain,d,plain,m
t,plain,h,plain,3
t,voiced,h,voiced,4";

    /// Tehtar in the order of the vowel classes 0 to 3.
    pub const VOWEL_SERIES: &str = "\
vowel,series
a,#EDC
e,$RFV
i,%TGB
o,^YHN
u,&UJM
y,\u{d8}\u{d9}\u{da}\u{db}";

    /// Which tehta of a series goes on a glyph.
    pub const VOWEL_CLASSES: &str = "\
glyph,class
`,3
~,3
1,1
q,1
a,2
z,2
2,0
w,0
s,0
x,0
3,2
e,2
d,1
c,1
4,0
r,0
f,0
v,0
5,0
t,0
g,0
b,0
6,1
y,1
h,2
n,2
7,2
u,2
j,0
m,0
i,2
\",\",2
9,3
o,0
l,2
.,2";

    pub const TEHTAR: &str = "#EDC$RFV%TGB^YHN&UJM";

    /// Alternate forms used when the glyph is not followed by a tehta.
    pub const NON_POST_VOCALIC: &str = "\
glyph,alternate
i,8
\",\",k";

    pub const SUFFIX_S: &str = "\
after,suffix
7um8k,\u{c5}
qwertyo,\u{c6}
l9,\u{a5}";

    pub const VOICED_TH: &str = "\
list,word
always-safe,feather
always-safe,together
always-safe,bathing
always-safe,bathe
always-safe,father
always-safe,mother
always-safe,clothing
always-safe,clothe
always-safe,brother
always-safe,weather
always-safe,either
always-safe,gather
always-safe,other
always-safe,another
always-safe,worthy
always-safe,rather
always-safe,soothing
always-safe,soothe
always-safe,smooth
always-safe,leather
always-safe,tether
always-safe,breathe
always-safe,breathing
always-safe,lathe
always-safe,seethe
always-safe,seething
always-safe,scathe
always-safe,scathing
always-safe,teethe
always-safe,teething
always-safe,loath
always-safe,loathing
always-safe,neither
always-safe,thence
always-safe,rhythm
always-safe,slither
always-safe,southern
always-safe,bother
always-safe,altogether
always-safe,lather
always-safe,hither
solo,that
solo,this
solo,than
solo,they
solo,thee
solo,though
prefix,their
prefix,these
prefix,those
prefix,although
prefix,them
prefix,thine
prefix,thy
prefix,thou
prefix,there
special,thither";

    pub const PUNCTUATION: &[(char, &str)] = &[
        ('.', "-"),
        (',', "\u{b7}"),
        ('!', "\u{c1}"),
        ('?', "\u{c0}"),
        (';', "\u{c3}"),
        ('"', "\u{bb}"),
        ('\'', "\u{b2}"),
        ('_', "\u{b7}"),
        ('-', "\u{b7}"),
        ('`', "\u{b1}"),
        (':', "-"),
        ('/', "\u{203a}"),
        ('\\', "\u{203a}"),
        ('<', "\u{152}"),
        ('>', "\u{153}"),
        ('[', "\u{152}"),
        (']', "\u{153}"),
        ('{', "\u{152}"),
        ('}', "\u{153}"),
        ('(', "\u{152}"),
        (')', "\u{153}"),
        ('@', "1E"),
        ('#', "9dE1x#"),
        ('$', "k\u{a1}"),
        ('%', "q6R85$1"),
        ('^', "z7D1R"),
        ('&', "5#2"),
        ('*', "\u{2c6}"),
        ('=', "\u{ac}"),
        ('+', "` \u{b0}"),
        ('|', "\u{bd}"),
        (' ', " "),
        ('\n', "\n"),
        ('\t', "\u{b7}-\u{b7}"),
    ];
}

mod conlang {
    /// Applied top to bottom to every word the dictionary does not know.
    pub const PHONETIC_RULES: &str = "\
kind,pattern,replacement
literal,c,k
literal,th,thr
literal,ph,f
literal,ch,kh
literal,sh,shr
literal,j,zh
literal,qu,kw
literal,x,ks
literal,tion,zhon
literal,sion,zhon
literal,v,f
literal,w,v
literal,y,i
collapse,aeiou,
final,s,z
final,ed,ad
final,ing,ugh
literal,oo,\u{fb}
literal,ee,\u{ee}
literal,aa,\u{e2}";

    /// An empty translation drops the word from the output.
    pub const DICTIONARY: &str = "\
english,black_speech
one,ash
ring,nazg
to,
rule,gimbatul
them,agh
all,burzum-ishi
and,agh
in,
the,
of,
darkness,burzum
bind,krimpatul
lord,uzbad
master,uzbad
king,uzbad
fire,gabil
flame,gabil
shadow,glob
dark,burzum
black,morn
death,gûl
evil,gûl
mountain,gundu
tower,barad
fortress,barad
iron,ang
steel,ang
sword,gurth
blade,gurth
hand,gabil
eye,lugburz
power,gash
strength,gash
great,uruk
mighty,uruk
servant,olog
slave,snaga
come,gû
go,gû
bring,thurkh
take,thurkh
kill,agh
destroy,agh
burn,gabil
break,krith
mine,khaz
gold,khaz
treasure,khaz
doom,dûm
fate,dûm
war,gabil
battle,gabil
blood,gû
pain,gash
fear,gûl
terror,gûl
hate,goth
anger,goth
wrath,goth
sorrow,nuin
grief,nuin
stone,khaz
earth,khaz
ground,khaz
sky,menel
star,gil
moon,ithil
sun,anor
light,gal
water,nen
river,nen
sea,gaer
wind,gwaih
storm,gwaih
thunder,gabil
lightning,gabil
cold,ring
ice,ring
snow,ring
hot,gabil
warm,gabil
big,uruk
large,uruk
huge,uruk
small,snaga
little,snaga
tiny,snaga
good,gâl
bad,gûl
beautiful,gâl
ugly,goth
strong,gash
weak,snaga
fast,thurkh
slow,glob
high,barad
low,glob
far,ungol
near,gû
old,iaur
new,shin
young,shin
dead,gûl
alive,cuio
born,no
die,gûl
live,cuio
eat,gor
drink,sûl
sleep,lûth
wake,daw
speak,lam
hear,lasta
see,tîr
know,ista
think,saed
remember,min
forget,delu
love,mel
like,mel
want,min
need,bane
have,har
give,anno
receive,goth
find,hir
lose,delu
win,tuv
begin,edra
end,teith
stop,dar
continue,minno
change,wend
stay,dar
move,minno
run,thurkh
walk,minno
fly,gwaih
fall,dant
rise,orch
climb,orch
jump,cab
swim,luin
work,bane
rest,lûth
play,telu
fight,gabil
attack,dagr
defend,thang
escape,rhosg
hide,thurin
show,tol
open,edra
close,thar
build,thang
create,caro
make,caro
repair,aeg
cut,risk
join,gwedh
separate,palan
mix,gwaed
clean,glan
dirty,gorth
wash,luin
wear,gwann
remove,eitha
put,gwaed
place,gwaed
turn,hwinion
push,thaur
pull,gwedh
lift,orgon
drop,dant
throw,hab
catch,rap
hold,gabil
release,leithia
touch,lav
hit,dagr
kick,dag
bite,nasg
scratch,rasc
freeze,ring
melt,thaw
boil,gabil
cook,gabil
raw,glass
ripe,beren
rotten,goth
sharp,maeg
dull,thind
smooth,balan
rough,gaern
hard,sarn
soft,lind
heavy,luin
thick,tiugh
thin,nim
wide,palan
narrow,aeg
deep,nunn
shallow,taw
empty,lhaw
full,bell
wet,nîn
dry,rû";
}
